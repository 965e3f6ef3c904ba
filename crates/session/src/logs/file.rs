//! FileSessionLog - per-session message and event files

use chrono::Utc;
use contracts::{LogError, SessionId, SessionLog};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const TYPE_NAME: &str = "FileSessionLog";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S%.3f";

/// File name prefix for a session: `BEGIN-SENDER-TARGET[-QUALIFIER]`
pub fn file_prefix(session_id: &SessionId) -> String {
    let mut prefix = format!(
        "{}-{}-{}",
        session_id.begin_string, session_id.sender_comp_id, session_id.target_comp_id
    );
    if let Some(qualifier) = &session_id.session_qualifier {
        prefix.push('-');
        prefix.push_str(qualifier);
    }
    prefix
}

/// Session log writing two append-only files under one directory
///
/// `<prefix>.messages.current.log` gets inbound and outbound messages,
/// `<prefix>.event.current.log` gets events. Every line is prefixed with a
/// UTC timestamp and flushed immediately.
pub struct FileSessionLog {
    session: String,
    messages_path: PathBuf,
    events_path: PathBuf,
    messages: Option<BufWriter<File>>,
    events: Option<BufWriter<File>>,
}

impl FileSessionLog {
    /// Open (or create) the log files for `session_id` under `dir`
    pub fn new(dir: impl AsRef<Path>, session_id: &SessionId) -> std::io::Result<Self> {
        let dir = dir.as_ref();
        // Create base directory if it doesn't exist
        fs::create_dir_all(dir)?;

        let prefix = file_prefix(session_id);
        let messages_path = dir.join(format!("{prefix}.messages.current.log"));
        let events_path = dir.join(format!("{prefix}.event.current.log"));

        Ok(Self {
            session: session_id.to_string(),
            messages: Some(open(&messages_path, false)?),
            events: Some(open(&events_path, false)?),
            messages_path,
            events_path,
        })
    }

    pub fn messages_path(&self) -> &Path {
        &self.messages_path
    }

    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    fn write_line(writer: &mut Option<BufWriter<File>>, text: &str) -> Result<(), LogError> {
        let writer = writer
            .as_mut()
            .ok_or(LogError::Disposed { object: TYPE_NAME })?;
        writeln!(writer, "{} : {}", Utc::now().format(TIMESTAMP_FORMAT), text)?;
        writer.flush()?;
        Ok(())
    }
}

fn open(path: &Path, truncate: bool) -> std::io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(!truncate)
        .truncate(truncate)
        .open(path)?;
    Ok(BufWriter::new(file))
}

impl SessionLog for FileSessionLog {
    #[instrument(name = "file_log_clear", skip(self), fields(session = %self.session))]
    fn clear(&mut self) -> Result<(), LogError> {
        if self.messages.is_none() {
            return Err(LogError::Disposed { object: TYPE_NAME });
        }
        // Both files must reopen before either handle is replaced
        let messages = open(&self.messages_path, true)?;
        let events = open(&self.events_path, true)?;
        self.messages = Some(messages);
        self.events = Some(events);
        debug!("log files truncated");
        Ok(())
    }

    fn on_incoming(&mut self, msg: &str) -> Result<(), LogError> {
        Self::write_line(&mut self.messages, msg)
    }

    fn on_outgoing(&mut self, msg: &str) -> Result<(), LogError> {
        Self::write_line(&mut self.messages, msg)
    }

    fn on_event(&mut self, text: &str) -> Result<(), LogError> {
        Self::write_line(&mut self.events, text)
    }

    fn dispose(&mut self) -> Result<(), LogError> {
        for writer in [self.messages.take(), self.events.take()].into_iter().flatten() {
            writer.into_inner().map_err(|e| e.into_error())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session() -> SessionId {
        SessionId::new("FIX.4.4", "SENDER", "TARGET")
    }

    fn read(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_file_prefix() {
        assert_eq!(file_prefix(&session()), "FIX.4.4-SENDER-TARGET");
        let qualified = session().with_qualifier("east");
        assert_eq!(file_prefix(&qualified), "FIX.4.4-SENDER-TARGET-east");
    }

    #[test]
    fn test_messages_and_events_go_to_separate_files() {
        let dir = tempdir().unwrap();
        let mut log = FileSessionLog::new(dir.path(), &session()).unwrap();

        log.on_incoming("8=FIX.4.4|35=A").unwrap();
        log.on_outgoing("8=FIX.4.4|35=0").unwrap();
        log.on_event("Logon received").unwrap();

        let messages = read(log.messages_path());
        assert_eq!(messages.len(), 2);
        assert!(messages[0].ends_with(" : 8=FIX.4.4|35=A"));
        assert!(messages[1].ends_with(" : 8=FIX.4.4|35=0"));

        let events = read(log.events_path());
        assert_eq!(events.len(), 1);
        assert!(events[0].ends_with(" : Logon received"));
        // YYYYMMDD-HH:MM:SS.fff
        assert_eq!(events[0].find(" : "), Some(21));
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempdir().unwrap();
        {
            let mut log = FileSessionLog::new(dir.path(), &session()).unwrap();
            log.on_event("first").unwrap();
            log.dispose().unwrap();
        }
        let mut log = FileSessionLog::new(dir.path(), &session()).unwrap();
        log.on_event("second").unwrap();

        assert_eq!(read(log.events_path()).len(), 2);
    }

    #[test]
    fn test_clear_truncates() {
        let dir = tempdir().unwrap();
        let mut log = FileSessionLog::new(dir.path(), &session()).unwrap();
        log.on_incoming("one").unwrap();
        log.on_event("two").unwrap();

        log.clear().unwrap();
        log.on_event("three").unwrap();

        assert!(read(log.messages_path()).is_empty());
        let events = read(log.events_path());
        assert_eq!(events.len(), 1);
        assert!(events[0].ends_with("three"));
    }

    #[test]
    fn test_failed_clear_keeps_logging_to_both_files() {
        let dir = tempdir().unwrap();
        let mut log = FileSessionLog::new(dir.path(), &session()).unwrap();
        log.on_incoming("kept").unwrap();

        // A directory in place of the events file makes its reopen fail
        fs::remove_file(log.events_path()).unwrap();
        fs::create_dir(log.events_path()).unwrap();

        assert!(matches!(log.clear(), Err(LogError::Io(_))));

        log.on_outgoing("after").unwrap();
        let messages = read(log.messages_path());
        assert_eq!(messages.len(), 2);
        assert!(messages[0].ends_with("kept"));
        assert!(messages[1].ends_with("after"));
    }

    #[test]
    fn test_dispose_is_idempotent_and_blocks_writes() {
        let dir = tempdir().unwrap();
        let mut log = FileSessionLog::new(dir.path(), &session()).unwrap();

        log.dispose().unwrap();
        log.dispose().unwrap();

        assert!(matches!(
            log.on_event("late"),
            Err(LogError::Disposed {
                object: "FileSessionLog"
            })
        ));
        assert!(log.clear().is_err());
    }
}
