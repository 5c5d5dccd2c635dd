//! Maven project descriptor reader: `pom.xml` to [`ProjectDescriptor`].
//!
//! [`ProjectDescriptor`]: flexmojo_core::project::ProjectDescriptor

pub mod pom;
pub mod xml;
