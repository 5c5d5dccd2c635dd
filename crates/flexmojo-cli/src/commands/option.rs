use miette::Result;

pub fn exec(name: &str, plugin: &str) -> Result<()> {
    let project = super::current_project()?;

    match project.plugin_option(plugin, name) {
        Some(value) => println!("{value}"),
        None => eprintln!("Option '{name}' is not declared for plugin '{plugin}'"),
    }

    Ok(())
}
