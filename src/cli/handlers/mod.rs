pub mod describe;
pub mod run;
pub mod show;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use transform_d::error::Error;

use crate::cli::global::GlobalArgs;

fn too_large(message: String) -> Error {
    Error::Io(io::Error::new(io::ErrorKind::FileTooLarge, message))
}

fn with_path(path: &Path, e: io::Error) -> Error {
    Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

/// Reads the whole input from `--input` or stdin, enforcing `max_size`
/// (0 = unlimited) unless `--force` is given.
pub fn read_input(global: &GlobalArgs, max_size: usize) -> Result<Vec<u8>, Error> {
    if let Some(path) = &global.input {
        if max_size > 0 {
            let file_size = fs::metadata(path).map_err(|e| with_path(path, e))?.len();
            if file_size > max_size as u64 {
                if !global.force {
                    return Err(too_large(format!(
                        "file size ({} bytes) exceeds limit ({} bytes), use --force to process anyway",
                        file_size, max_size
                    )));
                }
                log::warn!(
                    "processing large file ({} bytes, limit: {} bytes)",
                    file_size,
                    max_size
                );
            }
        }
        return fs::read(path).map_err(|e| with_path(path, e));
    }

    let mut buffer = Vec::new();
    let mut stdin = io::stdin().lock();
    if max_size > 0 && !global.force {
        stdin.by_ref().take(max_size as u64 + 1).read_to_end(&mut buffer)?;
        if buffer.len() > max_size {
            return Err(too_large(format!(
                "input exceeds limit ({} bytes), use --force to process anyway",
                max_size
            )));
        }
    } else {
        stdin.read_to_end(&mut buffer)?;
        if max_size > 0 && buffer.len() > max_size {
            log::warn!(
                "processing large input ({} bytes, limit: {} bytes)",
                buffer.len(),
                max_size
            );
        }
    }
    Ok(buffer)
}

/// Writes the output to `--output` or stdout.
pub fn write_output(global: &GlobalArgs, data: &[u8], trailing_newline: bool) -> Result<(), Error> {
    let mut payload = Vec::with_capacity(data.len() + 1);
    payload.extend_from_slice(data);
    if trailing_newline {
        payload.push(b'\n');
    }

    match &global.output {
        Some(path) => fs::write(path, &payload).map_err(|e| with_path(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&payload)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_file_rejected_without_force() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), b"0123456789").unwrap();

        let mut global = GlobalArgs {
            input: Some(file.path().to_path_buf()),
            ..GlobalArgs::default()
        };
        let err = read_input(&global, 4).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("--force"));

        global.force = true;
        assert_eq!(read_input(&global, 4).unwrap(), b"0123456789");
        global.force = false;
        assert_eq!(read_input(&global, 0).unwrap(), b"0123456789");
    }

    #[test]
    fn test_missing_input_names_path() {
        let global = GlobalArgs {
            input: Some("/nonexistent/input.bin".into()),
            ..GlobalArgs::default()
        };
        let err = read_input(&global, 0).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.bin"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let global = GlobalArgs {
            output: Some(path.clone()),
            ..GlobalArgs::default()
        };

        write_output(&global, b"abc", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"abc\n");
        write_output(&global, b"abc", false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"abc");
    }
}
