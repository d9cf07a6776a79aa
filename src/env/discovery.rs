use std::path::Path;

use super::{ENV_FILE_NAME, PRIVATE_ENV_FILE_NAME};

/// Which of the conventionally named environment files sit next to a request
/// file. Holds bare file names since the client runs inside that directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentFiles {
    pub public: Option<&'static str>,
    pub private: Option<&'static str>,
}

impl EnvironmentFiles {
    pub fn is_empty(&self) -> bool {
        self.public.is_none() && self.private.is_none()
    }

    /// Present files in lookup order: public before private.
    pub fn present(&self) -> impl Iterator<Item = &'static str> {
        self.public.into_iter().chain(self.private)
    }
}

pub fn find_environment_files(directory: &Path) -> EnvironmentFiles {
    let files = EnvironmentFiles {
        public: present_in(directory, ENV_FILE_NAME),
        private: present_in(directory, PRIVATE_ENV_FILE_NAME),
    };
    tracing::debug!(
        directory = %directory.display(),
        public = files.public.is_some(),
        private = files.private.is_some(),
        "discovered environment files"
    );
    files
}

fn present_in(directory: &Path, name: &'static str) -> Option<&'static str> {
    directory.join(name).exists().then_some(name)
}
