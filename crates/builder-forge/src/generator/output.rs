//! Writing generated builders to disk.
//!
//! A file is either written completely or not at all: the content goes to a
//! sibling temporary file which is then renamed over the destination.

use std::path::{Path, PathBuf};

use super::error::GenerateError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> GenerateError + '_ {
  move |source| GenerateError::Io {
    path: path.to_path_buf(),
    source,
  }
}

fn temporary_path(destination: &Path) -> PathBuf {
  let file_name = destination
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default();
  destination.with_file_name(format!(".{file_name}.tmp"))
}

/// Writes `code` to `destination`, creating parent directories as needed.
///
/// Fails with [`GenerateError::DestinationExists`] when the file exists and
/// `allow_overwrite` is off; the existing file is left untouched.
pub async fn write_generated(destination: &Path, code: &str, allow_overwrite: bool) -> Result<(), GenerateError> {
  if !allow_overwrite
    && tokio::fs::try_exists(destination)
      .await
      .map_err(io_error(destination))?
  {
    return Err(GenerateError::DestinationExists(destination.to_path_buf()));
  }

  if let Some(parent) = destination.parent()
    && !parent.as_os_str().is_empty()
  {
    tokio::fs::create_dir_all(parent).await.map_err(io_error(parent))?;
  }

  let temporary = temporary_path(destination);
  if let Err(error) = tokio::fs::write(&temporary, code).await {
    let _ = tokio::fs::remove_file(&temporary).await;
    return Err(io_error(&temporary)(error));
  }
  if let Err(error) = tokio::fs::rename(&temporary, destination).await {
    let _ = tokio::fs::remove_file(&temporary).await;
    return Err(io_error(destination)(error));
  }

  Ok(())
}
