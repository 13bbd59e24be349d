use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell};

include!("src/options.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!("Failed to create a directory at {dir:?}, encountered error {err:?}. Aborting...");
    }

    res
}

fn generate_for(
    app: Command, name: &'static str, completion_dir: &Path, manpage_dir: &Path,
) -> Result<()> {
    let mut app = app.name(name);

    generate_to(Shell::Bash, &mut app, name, completion_dir)?;
    generate_to(Shell::Zsh, &mut app, name, completion_dir)?;
    generate_to(Shell::Fish, &mut app, name, completion_dir)?;
    generate_to(Shell::PowerShell, &mut app, name, completion_dir)?;
    generate_to(Shell::Elvish, &mut app, name, completion_dir)?;

    let man = clap_mangen::Man::new(app);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(manpage_dir.join(format!("{name}.1")), buffer)?;

    Ok(())
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/usage-bars/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/usage-bars/manpage/";

    if env::var_os("USAGE_BARS_GENERATE").is_some_and(|var| !var.is_empty()) {
        let completion_out_dir = PathBuf::from(COMPLETION_DIR);
        let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

        create_dir(&completion_out_dir)?;
        create_dir(&manpage_out_dir)?;

        generate_for(
            MembarArgs::command(),
            "membar",
            &completion_out_dir,
            &manpage_out_dir,
        )?;
        generate_for(
            DubarArgs::command(),
            "dubar",
            &completion_out_dir,
            &manpage_out_dir,
        )?;
    }

    println!("cargo:rerun-if-env-changed=USAGE_BARS_GENERATE");

    Ok(())
}
