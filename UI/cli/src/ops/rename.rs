use clap::ArgMatches;
use log::{debug, info};
use logger::{highlight, pathlight};
use spacename::ops::core::filesystem::Route;
use spacename::ops::rename;
use spacename::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::errors::{Error, ErrorKind};
use crate::AppResult;

#[derive(Debug)]
pub struct Rename {
    apply: bool,
    init: bool,
    path: PathBuf,
    exclude: Option<String>,
    config: Option<PathBuf>,
}

impl Rename {
    pub fn build(matches: &ArgMatches<'_>) -> Self {
        Self {
            apply: matches.is_present("apply"),
            init: matches.is_present("init"),
            path: PathBuf::from(matches.value_of("path").unwrap_or(".")),
            exclude: matches.value_of("exclude").map(String::from),
            config: matches.value_of("config").map(PathBuf::from),
        }
    }

    pub fn run(&self) -> AppResult<()> {
        let config = self.config()?;
        if self.init {
            config.save(&self.path)?;
        }

        info!("Planning the rename of {}", pathlight(&self.path));
        let plan = rename::rename(&mut EventSpaces::new(&self.path), config.options())?;
        if plan.is_empty() {
            info!("No event space has files to rename");
            return Ok(());
        }

        debug!(
            "{} files planned over {} event spaces",
            plan.len(),
            plan.spaces().len()
        );
        operate(!config.dry_run, plan)
    }

    /// Loads the configuration file and applies the command line overrides over it
    fn config(&self) -> AppResult<Config> {
        let mut config = match self.config {
            Some(ref file) => Config::load_from(file)?,
            None => Config::load(&self.path)?,
        };

        if self.apply {
            config.dry_run = false;
        }

        if let Some(ref value) = self.exclude {
            if value.is_empty() {
                return Err(ErrorKind::InvalidInput {
                    arg: "--exclude".to_string(),
                    value: value.to_string(),
                }
                .into());
            }

            config.exclude = value.to_string();
        }

        Ok(config)
    }
}

fn operate(run: bool, plan: RenamePlan) -> AppResult<()> {
    if !run {
        info!("Dry run, use {} to perform the renames", highlight("--apply"));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for space in plan {
        report_space(&space, &mut out).map_err(|err| Error::with_cause(ErrorKind::Output, err))?;

        if run {
            space.log_run(&|action| {
                info!(
                    "renamed {} -> {}",
                    pathlight(action.src.path()),
                    pathlight(action.dst.path())
                );
            })?;
        }
    }

    if run {
        info!("Rename performed successfully");
    }

    Ok(())
}

/// Writes the header of the event space followed by its mapping
fn report_space<W: Write>(space: &SpaceModel, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n[{}]", space.name())?;
    for action in space.actions() {
        writeln!(out, "{} -> {}", action.src.display(), action.dst.display())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::report_space;
    use spacename::ops::rename::rename;
    use spacename::prelude::{EventSpaces, RenameOptions, RenamePlan};
    use std::fs::{self, File};

    fn report(plan: &RenamePlan) -> String {
        let mut out = Vec::new();
        for space in plan.spaces() {
            report_space(space, &mut out).expect("Unable to write the report");
        }

        String::from_utf8(out).expect("Invalid utf-8")
    }

    #[test]
    fn test_report_format() {
        let dir = tempfile::tempdir().expect("Unable to create tmp directory");
        let root = dir.path().join(".");
        fs::create_dir(root.join("garden")).expect("Unable to create dir");
        File::create(root.join("garden/plan.pdf")).expect("Unable to create file");
        fs::create_dir(root.join("room1")).expect("Unable to create dir");
        for name in &["b.jpg", "a.png", "plan.txt"] {
            File::create(root.join("room1").join(name)).expect("Unable to create file");
        }

        let plan = rename(&mut EventSpaces::new(&root), RenameOptions::default())
            .expect("Unable to build the model");
        let room = root.join("room1");
        let expected = format!(
            "\n[room1]\n{} -> {}\n{} -> {}\n",
            room.join("a.png").display(),
            room.join("room11.png").display(),
            room.join("b.jpg").display(),
            room.join("room12.jpg").display(),
        );
        assert_eq!(report(&plan), expected);
    }

    #[test]
    fn test_report_relative_root() {
        let dir = tempfile::tempdir().expect("Unable to create tmp directory");
        fs::create_dir(dir.path().join("hall")).expect("Unable to create dir");
        File::create(dir.path().join("hall/a.png")).expect("Unable to create file");

        std::env::set_current_dir(dir.path()).expect("Unable to change dir");
        let plan = rename(&mut EventSpaces::new("."), RenameOptions::default())
            .expect("Unable to build the model");

        assert_eq!(report(&plan), "\n[hall]\n./hall/a.png -> ./hall/hall1.png\n");
    }
}
