use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::config(path.display().to_string(), e))?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `data` as pretty printed JSON followed by a newline
pub fn write_json<T: Serialize, W: Write>(data: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, data)?;
    writeln!(writer)?;
    Ok(())
}
