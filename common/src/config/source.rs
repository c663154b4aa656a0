use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Where serialized configuration text lives. `Ok(None)` means nothing has been stored yet.
pub trait ConfigSource {
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, content: &str) -> Result<(), String>;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }

    fn write(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.path.display(), e)
        })
    }
}

#[derive(Default)]
pub struct MemoryConfigSource {
    content: Mutex<Option<String>>,
}

impl MemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ConfigSource for MemoryConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        let content = self
            .content
            .lock()
            .map_err(|_| "Config source lock poisoned".to_string())?;
        Ok(content.clone())
    }

    fn write(&self, content: &str) -> Result<(), String> {
        let mut current = self
            .content
            .lock()
            .map_err(|_| "Config source lock poisoned".to_string())?;
        *current = Some(content.to_string());
        Ok(())
    }
}
