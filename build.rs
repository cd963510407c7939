use std::env;
use std::process::Command;

fn main() {
    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=TARGET={}", target);
    }

    match env::var("BUILD_REV") {
        Ok(rev) => {
            println!("cargo:rustc-env=BUILD_REV={}", rev);
        }
        Err(_) => match get_git_rev() {
            Err(err) => {
                eprintln!("Failed to get git revision: {}", err);
            }
            Ok(rev) => {
                println!("cargo:rustc-env=BUILD_REV={}", rev.trim());
            }
        },
    }
    println!("cargo:rerun-if-env-changed=BUILD_REV");
}

fn get_git_rev() -> Result<String, Box<dyn std::error::Error>> {
    let output = Command::new("git")
        .arg("rev-parse")
        .arg("--short")
        .arg("HEAD")
        .output()?;
    if !output.status.success() {
        return Err("git rev-parse failed".into());
    }
    let rev = String::from_utf8_lossy(&output.stdout);
    Ok(rev.into_owned())
}
