use std::io::{self, BufRead, Write};

use gh_issues::config::{Config, DEFAULT_HOST};
use gh_issues::error::{GhIssuesError, Result};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn render_config(token: &str, host: &str) -> String {
    let mut content = format!("token = \"{token}\"\n");
    if !host.is_empty() && host != DEFAULT_HOST {
        content.push_str(&format!("host = \"{host}\"\n"));
    }
    content
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("gh-issues Configuration");
    println!("=======================\n");

    let token = prompt(
        "Enter a GitHub token (create one at https://github.com/settings/tokens): ",
    )?;
    if token.is_empty() {
        return Err(GhIssuesError::MissingToken);
    }

    let host = prompt(&format!("GitHub host [{DEFAULT_HOST}]: "))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GhIssuesError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, render_config(&token, &host)).map_err(|e| {
        GhIssuesError::ConfigRead {
            path: config_path.clone(),
            source: e,
        }
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now run 'gh-issues search'.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_default_host_omitted() {
        assert_eq!(render_config("ghp_x", ""), "token = \"ghp_x\"\n");
        assert_eq!(render_config("ghp_x", "github.com"), "token = \"ghp_x\"\n");
    }

    #[test]
    fn test_render_config_enterprise_host() {
        assert_eq!(
            render_config("ghp_x", "github.example.com"),
            "token = \"ghp_x\"\nhost = \"github.example.com\"\n"
        );
    }
}
