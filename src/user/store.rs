use super::User;

/// The last fetched user list and the state of fetching it.
#[derive(Clone, Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
}

impl UserStore {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn complete_fetch(&mut self, users: Vec<User>) {
        self.loading = false;
        self.users = users;
    }

    // the previous list, if any, is kept
    pub fn fail_fetch(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
