//! Goal lifecycle: set up, run, tear down.

/// A build goal.
///
/// [`execute`](Mojo::execute) runs the three phases in order and stops at
/// the first failure; `tear_down` is not reached when an earlier phase fails.
pub trait Mojo {
    /// Goal name as used on the command line (e.g. `compile-swf`).
    fn goal(&self) -> &'static str;

    /// Validate inputs and prepare the work.
    fn set_up(&mut self) -> miette::Result<()>;

    /// Do the work.
    fn run(&mut self) -> miette::Result<()>;

    /// Clean up after a successful run.
    fn tear_down(&mut self) -> miette::Result<()>;

    fn execute(&mut self) -> miette::Result<()> {
        let goal = self.goal();
        tracing::debug!(goal, "set up");
        self.set_up()?;
        tracing::debug!(goal, "run");
        self.run()?;
        tracing::debug!(goal, "tear down");
        self.tear_down()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        fail_in: Option<&'static str>,
    }

    impl Recorder {
        fn step(&mut self, name: &'static str) -> miette::Result<()> {
            self.calls.push(name);
            if self.fail_in == Some(name) {
                miette::bail!("{name} failed");
            }
            Ok(())
        }
    }

    impl Mojo for Recorder {
        fn goal(&self) -> &'static str {
            "record"
        }
        fn set_up(&mut self) -> miette::Result<()> {
            self.step("set_up")
        }
        fn run(&mut self) -> miette::Result<()> {
            self.step("run")
        }
        fn tear_down(&mut self) -> miette::Result<()> {
            self.step("tear_down")
        }
    }

    #[test]
    fn phases_run_in_order() {
        let mut m = Recorder::default();
        m.execute().unwrap();
        assert_eq!(m.calls, vec!["set_up", "run", "tear_down"]);
    }

    #[test]
    fn failure_stops_the_lifecycle() {
        let mut m = Recorder {
            fail_in: Some("set_up"),
            ..Default::default()
        };
        let err = m.execute().unwrap_err();
        assert!(err.to_string().contains("set_up failed"));
        assert_eq!(m.calls, vec!["set_up"]);

        let mut m = Recorder {
            fail_in: Some("run"),
            ..Default::default()
        };
        assert!(m.execute().is_err());
        assert_eq!(m.calls, vec!["set_up", "run"]);
    }
}
