//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::keys::{
    parse_authorized_key, KeyCreateRequest, KeyId, KeyUpdateRequest, KeysApi, KeysService,
    SshKey,
};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured API
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let service = config.build_keys_service()?;

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.execute(&service, &mut stdin.lock(), &mut stdout.lock())
            .await
    }

    /// Load configuration, applying command-line overrides
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        Ok(config
            .with_access_token(self.cli.access_token.clone())
            .with_api_url(self.cli.api_url.clone()))
    }

    /// Execute the command with the given service and terminal streams
    pub async fn execute<A: KeysApi>(
        &self,
        service: &KeysService<A>,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<()> {
        match &self.cli.command {
            Commands::List => {
                let keys = service.list().await?;
                info!("Listed {} SSH keys", keys.len());
                self.print_keys(out, &keys)
            }
            Commands::Get { id } => {
                let key = service.get(id).await?;
                self.print_key(out, &key)
            }
            Commands::Create { name, public_key } => {
                let key = service
                    .create(&KeyCreateRequest::new(name, public_key))
                    .await?;
                info!("Created SSH key {}", key.id);
                self.print_key(out, &key)
            }
            Commands::Import {
                name,
                public_key_file,
            } => {
                let request = import_request(name.as_deref(), public_key_file)?;
                let key = service.create(&request).await?;
                info!("Imported SSH key {} from {}", key.id, public_key_file.display());
                self.print_key(out, &key)
            }
            Commands::Update { id, name } => {
                let key = service.update(id, &KeyUpdateRequest::new(name)).await?;
                self.print_key(out, &key)
            }
            Commands::Delete { id, force } => {
                let id = KeyId::parse(id)?;
                if !*force && !confirm_delete(input, out)? {
                    return Err(Error::Other("operation aborted".to_string()));
                }
                service.delete_key(&id).await?;
                info!("Deleted SSH key {id}");
                Ok(())
            }
        }
    }

    fn print_key(&self, out: &mut impl Write, key: &SshKey) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, key)?;
                writeln!(out)?;
                Ok(())
            }
            OutputFormat::Pretty => self.print_keys(out, std::slice::from_ref(key)),
        }
    }

    fn print_keys(&self, out: &mut impl Write, keys: &[SshKey]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, keys)?;
                writeln!(out)?;
            }
            OutputFormat::Pretty => {
                let rows: Vec<[String; 3]> = keys
                    .iter()
                    .map(|k| [k.id.to_string(), k.name.clone(), k.fingerprint.clone()])
                    .collect();
                write_table(out, ["ID", "Name", "FingerPrint"], &rows, !self.cli.no_header)?;
            }
        }
        Ok(())
    }
}

/// Build a create request from a public key file
fn import_request(name: Option<&str>, path: &Path) -> Result<KeyCreateRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read public key file '{}'", path.display()))?;
    let parsed = parse_authorized_key(&content)?;

    let name = match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => parsed.comment.ok_or_else(|| {
            Error::Other("key has no comment to name it by; pass --name".to_string())
        })?,
    };

    Ok(KeyCreateRequest::new(name, parsed.line))
}

/// Ask before deleting; anything but `y`/`yes` declines
fn confirm_delete(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(
        out,
        "Warning: Are you sure you want to delete this SSH key? (y/N) "
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Write left-aligned columns separated by three spaces
fn write_table<const N: usize>(
    out: &mut impl Write,
    header: [&str; N],
    rows: &[[String; N]],
    show_header: bool,
) -> Result<()> {
    let mut widths = [0usize; N];
    if show_header {
        for (width, title) in widths.iter_mut().zip(header) {
            *width = title.len();
        }
    }
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut write_row = |cells: Vec<&str>| -> Result<()> {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("   ");
        writeln!(out, "{}", line.trim_end())?;
        Ok(())
    };

    if show_header {
        write_row(header.to_vec())?;
    }
    for row in rows {
        write_row(row.iter().map(String::as_str).collect())?;
    }
    Ok(())
}
