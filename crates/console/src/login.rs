//! Welcome screen: login, sign-up or exit.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use dealership_auth::{AuthError, Operator, UserDirectory};

use crate::prompt::Prompter;

/// How the welcome screen ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Welcome {
    Authenticated(Operator),
    /// The operator chose to leave (or input ended).
    Exited,
    /// Credentials were wrong or the retries ran out.
    Failed,
}

/// Run the welcome screen. `attempts` bounds both login tries and sign-up
/// username retries.
pub fn authenticate<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    directory: &mut UserDirectory,
    attempts: u32,
) -> io::Result<Welcome> {
    prompter.say("Welcome to the Car Dealership Management System")?;
    prompter.say("Do you want to login, sign up, or exit? (login/signup/exit)")?;
    let Some(action) = prompter.read_line()? else {
        return Ok(Welcome::Exited);
    };

    match action.trim().to_lowercase().as_str() {
        "login" => login(prompter, directory, attempts),
        "signup" => {
            if !sign_up(prompter, directory, attempts)? {
                return Ok(Welcome::Failed);
            }
            prompter.say("Registration successful! Please login.")?;
            login(prompter, directory, attempts)
        }
        "exit" => Ok(Welcome::Exited),
        other => {
            warn!(choice = other, "unknown welcome choice");
            prompter.say("Invalid choice. Exiting...")?;
            Ok(Welcome::Exited)
        }
    }
}

fn login<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    directory: &UserDirectory,
    attempts: u32,
) -> io::Result<Welcome> {
    for attempt in 1..=attempts {
        // Input ending after a rejected attempt still counts as a failed login.
        let closed = if attempt > 1 {
            Welcome::Failed
        } else {
            Welcome::Exited
        };
        prompter.say("Enter username:")?;
        let Some(username) = prompter.read_line()? else {
            return Ok(closed);
        };
        prompter.say("Enter password:")?;
        let Some(password) = prompter.read_line()? else {
            return Ok(closed);
        };

        match directory.login(username.trim(), &password) {
            Ok(operator) => {
                prompter.say("Login successful!")?;
                return Ok(Welcome::Authenticated(operator));
            }
            Err(_) => {
                prompter.say("Login failed. Please check your username and password.")?;
                if attempt < attempts {
                    prompter.say(format!("{} attempt(s) left.", attempts - attempt))?;
                }
            }
        }
    }

    warn!(attempts, "login attempts exhausted");
    Ok(Welcome::Failed)
}

/// Register a fresh account. Returns `false` when the retries ran out.
fn sign_up<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    directory: &mut UserDirectory,
    attempts: u32,
) -> io::Result<bool> {
    for _ in 0..attempts {
        prompter.say("Choose a username:")?;
        let Some(username) = prompter.read_line()? else {
            return Ok(false);
        };
        let username = username.trim().to_string();
        if directory.contains(&username) {
            prompter.say("Username already exists. Please choose a different username.")?;
            continue;
        }

        prompter.say("Choose a password:")?;
        let Some(password) = prompter.read_line()? else {
            return Ok(false);
        };

        match directory.sign_up(&username, &password) {
            Ok(()) => {
                info!(username = %username, "sign-up completed");
                return Ok(true);
            }
            Err(AuthError::UsernameTaken(_)) => {
                prompter.say("Username already exists. Please choose a different username.")?;
            }
            Err(err) => prompter.say(format!("{err}. Please try again."))?,
        }
    }

    prompter.say("Too many attempts. Exiting...")?;
    Ok(false)
}
