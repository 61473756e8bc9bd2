use std::io::{BufRead, Write};

use super::types::Credential;
use crate::error::{Error, Result};

/// Picks exactly one credential for the run.
///
/// An explicit user always means basic auth with a prompted password. Otherwise
/// the first non-blank token wins: `explicit_token` (flag or `GITHUB_TOKEN`),
/// the `gh`-style environment variables for `host`, then `gh auth token`. With
/// no token anywhere the user is prompted for a username and password.
pub(crate) fn resolve_credential(
    explicit_user: Option<&str>,
    explicit_token: Option<&str>,
    host: Option<&str>,
) -> Result<Credential> {
    if let Some(user) = explicit_user {
        let username = non_blank(user).ok_or_else(|| Error::authentication("empty username"))?;
        let password = prompt_password()?;
        return basic(username.to_string(), password);
    }

    if let Some(token) = explicit_token.and_then(non_blank) {
        return Ok(Credential::Token(token.to_string()));
    }

    if let Some(host) = host {
        if let Some(token) = token_from_env(host) {
            tracing::debug!(host, "using token from environment");
            return Ok(Credential::Token(token));
        }
        if let Some(token) = token_from_gh(host) {
            tracing::debug!(host, "using token from gh auth");
            return Ok(Credential::Token(token));
        }
    }

    let username = read_username(&mut std::io::stdin().lock(), &mut std::io::stdout())?;
    let password = prompt_password()?;
    basic(username, password)
}

fn basic(username: String, password: String) -> Result<Credential> {
    if password.is_empty() {
        return Err(Error::authentication("empty password"));
    }
    Ok(Credential::Basic { username, password })
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value) }
}

fn token_from_env(host: &str) -> Option<String> {
    let keys: &[&str] = if host.eq_ignore_ascii_case("github.com") {
        &["GH_TOKEN"]
    } else {
        &["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    };

    for key in keys {
        if let Ok(token) = std::env::var(key)
            && let Some(token) = non_blank(&token)
        {
            return Some(token.to_string());
        }
    }

    None
}

fn token_from_gh(host: &str) -> Option<String> {
    let output = match std::process::Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to execute `gh auth token`");
            return None;
        }
    };

    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8_lossy(&output.stdout);
    non_blank(&token).map(str::to_string)
}

fn read_username(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "User: ")
        .and_then(|_| output.flush())
        .map_err(|e| Error::credential_read("unable to write username prompt", e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::credential_read("unable to read username", e))?;
    if read == 0 {
        return Err(Error::authentication("unable to read username: end of input"));
    }

    non_blank(&line)
        .map(str::to_string)
        .ok_or_else(|| Error::authentication("empty username"))
}

fn prompt_password() -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Password: ")
        .and_then(|_| stdout.flush())
        .map_err(|e| Error::credential_read("unable to write password prompt", e))?;
    rpassword::read_password().map_err(|e| Error::credential_read("unable to read password", e))
}
