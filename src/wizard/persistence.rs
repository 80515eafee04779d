use crate::config::ConfigModel;
use crate::shared::errors::PersistError;
use crate::shared::fs_atomic::{atomic_write_file, remove_file_if_exists};
use crate::shared::logging::EventLog;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;

/// Storage boundary for in-progress wizard configs.
///
/// `save` receives its own copy of the config after every section update. It
/// must not fail into the caller: implementations swallow and log their own
/// errors.
pub trait ProgressPersister {
    /// Partial config from an earlier session, consulted once at startup.
    fn load(&self) -> Option<Value> {
        None
    }

    fn save(&self, snapshot: ConfigModel);

    /// Called after a successful submission.
    fn clear(&self) {}
}

impl<P: ProgressPersister + ?Sized> ProgressPersister for &P {
    fn load(&self) -> Option<Value> {
        (**self).load()
    }

    fn save(&self, snapshot: ConfigModel) {
        (**self).save(snapshot)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<P: ProgressPersister + ?Sized> ProgressPersister for Rc<P> {
    fn load(&self) -> Option<Value> {
        (**self).load()
    }

    fn save(&self, snapshot: ConfigModel) {
        (**self).save(snapshot)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<P: ProgressPersister + ?Sized> ProgressPersister for Box<P> {
    fn load(&self) -> Option<Value> {
        (**self).load()
    }

    fn save(&self, snapshot: ConfigModel) {
        (**self).save(snapshot)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressPersister for NoProgress {
    fn save(&self, _snapshot: ConfigModel) {}
}

/// Progress kept as a pretty-printed JSON file, replaced atomically.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
    log: EventLog,
}

impl FileProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            log: EventLog::detached(),
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Option<Value>, PersistError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistError::Read {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistError::Parse {
                path: self.path.display().to_string(),
                source,
            })
    }

    pub fn write(&self, config: &ConfigModel) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let body = serde_json::to_vec_pretty(config).map_err(|source| PersistError::Encode {
            path: self.path.display().to_string(),
            source,
        })?;
        atomic_write_file(&self.path, &body).map_err(|source| PersistError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }

    pub fn remove(&self) -> Result<bool, PersistError> {
        remove_file_if_exists(&self.path).map_err(|source| PersistError::Remove {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl ProgressPersister for FileProgressStore {
    fn load(&self) -> Option<Value> {
        match self.read() {
            Ok(seed) => seed,
            Err(err) => {
                self.log.warn("progress.load_failed", &err.to_string());
                None
            }
        }
    }

    fn save(&self, snapshot: ConfigModel) {
        match self.write(&snapshot) {
            Ok(()) => self
                .log
                .debug("progress.saved", &self.path.display().to_string()),
            Err(err) => self.log.warn("progress.save_failed", &err.to_string()),
        }
    }

    fn clear(&self) {
        if let Err(err) = self.remove() {
            self.log.warn("progress.clear_failed", &err.to_string());
        }
    }
}

enum PersistCommand {
    Save(ConfigModel),
    Clear,
}

/// Hands snapshots to a writer thread so `save` never waits on storage.
///
/// Commands queued while the writer is busy collapse to the latest one.
/// Dropping the persister flushes the queue and joins the thread.
pub struct DetachedPersister {
    seed: Option<Value>,
    sender: Option<mpsc::Sender<PersistCommand>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl DetachedPersister {
    pub fn spawn<P>(inner: P) -> std::io::Result<Self>
    where
        P: ProgressPersister + Send + 'static,
    {
        let seed = inner.load();
        let (sender, receiver) = mpsc::channel::<PersistCommand>();
        let worker = thread::Builder::new()
            .name("mhia-progress-writer".to_string())
            .spawn(move || {
                while let Ok(first) = receiver.recv() {
                    let mut latest = first;
                    while let Ok(next) = receiver.try_recv() {
                        latest = next;
                    }
                    match latest {
                        PersistCommand::Save(snapshot) => inner.save(snapshot),
                        PersistCommand::Clear => inner.clear(),
                    }
                }
            })?;
        Ok(Self {
            seed,
            sender: Some(sender),
            worker: Some(worker),
        })
    }
}

impl ProgressPersister for DetachedPersister {
    fn load(&self) -> Option<Value> {
        self.seed.clone()
    }

    fn save(&self, snapshot: ConfigModel) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(PersistCommand::Save(snapshot));
        }
    }

    fn clear(&self) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(PersistCommand::Clear);
        }
    }
}

impl Drop for DetachedPersister {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
