use std::io::Write;

use crate::clients::errors::Result;

/// Variable holding the application client id.
pub const CLIENT_ID_VAR: &str = "SPOTIFY_ID";
/// Variable holding the application client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_SECRET";
/// Redirect URI registered for the app; the authorization page sends the user here.
pub const REDIRECT_URI: &str = "http://localhost:8888/callback";

const RULE: &str = "=================================================================";

/// Spotify application credentials taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCredentials {
    /// Value of `SPOTIFY_ID`
    pub client_id: String,
    /// Value of `SPOTIFY_SECRET`
    pub client_secret: String,
}

/// Names of the variables that were unset or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCredentials {
    /// Variable names in lookup order
    pub missing: Vec<&'static str>,
}

impl AppCredentials {
    /// Read both variables from the process environment.
    pub fn from_env() -> std::result::Result<Self, MissingCredentials> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through `lookup`, collecting every missing name
    /// rather than stopping at the first.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, MissingCredentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let client_id = read(CLIENT_ID_VAR);
        let client_secret = read(CLIENT_SECRET_VAR);

        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(AppCredentials {
                client_id,
                client_secret,
            }),
            (id, secret) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push(CLIENT_ID_VAR);
                }
                if secret.is_none() {
                    missing.push(CLIENT_SECRET_VAR);
                }
                Err(MissingCredentials { missing })
            }
        }
    }
}

impl MissingCredentials {
    /// Print the setup banner shown before the process gives up.
    pub fn write_guidance<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(out, "ERROR: Spotify API credentials not properly configured")?;
        writeln!(out, "{RULE}")?;
        for name in &self.missing {
            writeln!(out, "Missing {name} environment variable")?;
        }
        writeln!(out)?;
        writeln!(out, "To set up your credentials:")?;
        writeln!(out, "1. Go to https://developer.spotify.com/dashboard/")?;
        writeln!(out, "2. Log in and create a new app")?;
        writeln!(
            out,
            "3. Set the redirect URI to {REDIRECT_URI} in your app settings"
        )?;
        writeln!(out, "4. Set these environment variables with your credentials:")?;
        writeln!(out, "   export {CLIENT_ID_VAR}=your_client_id")?;
        writeln!(out, "   export {CLIENT_SECRET_VAR}=your_client_secret")?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }
}
