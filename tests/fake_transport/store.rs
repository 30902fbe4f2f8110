//! `Store` and `Folder` over the shared test mailbox

use super::mailbox::{FolderEntry, SEPARATOR, Shared};
use mail_session::{Credentials, Error, Folder, FolderKind, OpenMode, Result, Store};

#[derive(Debug)]
pub struct FakeStore {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    connected: bool,
    connect_error: Option<String>,
    mailbox: Shared,
}

impl FakeStore {
    pub fn new(
        protocol: String,
        host: String,
        port: u16,
        connected: bool,
        connect_error: Option<String>,
        mailbox: Shared,
    ) -> Self {
        Self {
            protocol,
            host,
            port,
            connected,
            connect_error,
            mailbox,
        }
    }

    pub fn logins(&self) -> Vec<Option<Credentials>> {
        self.mailbox.lock().unwrap().logins.clone()
    }

    pub fn creates(&self) -> Vec<String> {
        self.mailbox.lock().unwrap().creates.clone()
    }

    fn handle(&self, full_name: &str) -> FakeFolder {
        FakeFolder::new(full_name.to_string(), self.mailbox.clone())
    }
}

impl Store for FakeStore {
    type Folder = FakeFolder;

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self, credentials: Option<&Credentials>) -> Result<()> {
        if let Some(reason) = &self.connect_error {
            return Err(Error::Transport(reason.clone()));
        }
        self.mailbox
            .lock()
            .unwrap()
            .logins
            .push(credentials.cloned());
        self.connected = true;
        Ok(())
    }

    fn folder(&self, name: &str) -> Result<FakeFolder> {
        Ok(self.handle(name))
    }

    fn default_folder(&self) -> Result<FakeFolder> {
        Ok(self.handle(""))
    }

    fn close(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeFolder {
    full_name: String,
    mode: Option<OpenMode>,
    mailbox: Shared,
}

impl FakeFolder {
    fn new(full_name: String, mailbox: Shared) -> Self {
        Self {
            full_name,
            mode: None,
            mailbox,
        }
    }

    fn is_root(&self) -> bool {
        self.full_name.is_empty()
    }

    fn missing(&self) -> Error {
        Error::Transport(format!("folder '{}' not found", self.full_name))
    }
}

impl Folder for FakeFolder {
    fn name(&self) -> &str {
        self.full_name
            .rsplit(SEPARATOR)
            .next()
            .unwrap_or(&self.full_name)
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn exists(&self) -> Result<bool> {
        let mailbox = self.mailbox.lock().unwrap();
        Ok(if self.is_root() {
            mailbox.root_exists
        } else {
            mailbox.get(&self.full_name).is_some()
        })
    }

    fn kind(&self) -> Result<FolderKind> {
        let mailbox = self.mailbox.lock().unwrap();
        if self.is_root() {
            return Ok(mailbox.root_kind);
        }
        mailbox
            .get(&self.full_name)
            .map(|f| f.kind)
            .ok_or_else(|| self.missing())
    }

    fn list(&self) -> Result<Vec<Self>> {
        let mailbox = self.mailbox.lock().unwrap();
        Ok(mailbox
            .folders
            .iter()
            .filter(|f| f.parent() == self.full_name)
            .map(|f| Self::new(f.full_name.clone(), self.mailbox.clone()))
            .collect())
    }

    fn folder(&self, name: &str) -> Result<Self> {
        let full_name = if self.is_root() {
            name.to_string()
        } else {
            format!("{}{SEPARATOR}{name}", self.full_name)
        };
        Ok(Self::new(full_name, self.mailbox.clone()))
    }

    fn create(&mut self, kind: FolderKind) -> Result<bool> {
        let mut mailbox = self.mailbox.lock().unwrap();
        if mailbox.refuse_create {
            return Ok(false);
        }
        mailbox.creates.push(self.full_name.clone());

        let mut path = String::new();
        let segments: Vec<&str> = self.full_name.split(SEPARATOR).collect();
        for (i, segment) in segments.iter().enumerate() {
            if !path.is_empty() {
                path.push(SEPARATOR);
            }
            path.push_str(segment);
            if mailbox.get(&path).is_none() {
                let kind = if i + 1 == segments.len() {
                    kind
                } else {
                    FolderKind::HOLDS_FOLDERS
                };
                mailbox.folders.push(FolderEntry {
                    full_name: path.clone(),
                    kind,
                });
            }
        }
        Ok(true)
    }

    fn open(&mut self, mode: OpenMode) -> Result<()> {
        if !self.exists()? {
            return Err(self.missing());
        }
        self.mode = Some(mode);
        Ok(())
    }

    fn mode(&self) -> Option<OpenMode> {
        self.mode
    }

    fn close(&mut self) -> Result<()> {
        self.mode = None;
        Ok(())
    }
}
