use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use linepaint_core::{BitSequence, RenderOptions, render};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if !path.join("input.bin").exists() {
            continue;
        }
        regenerate_one(&path)?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path) -> Result<(), String> {
    let input_path = dir.join("input.bin");
    let options_path = dir.join("options.json");
    let input = fs::read(&input_path)
        .map_err(|err| format!("failed to read {}: {}", input_path.display(), err))?;
    let options: RenderOptions = match fs::read_to_string(&options_path) {
        Ok(json) => serde_json::from_str(&json)
            .map_err(|err| format!("invalid options in {}: {}", options_path.display(), err))?,
        Err(_) => RenderOptions::default(),
    };

    let plan = render(&BitSequence::from_bytes(&input), &options)
        .map_err(|err| format!("render failed for {}: {}", dir.display(), err))?;
    let json = serde_json::to_string(&plan)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    let output = dir.join("expected_plan.json");
    fs::write(&output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
