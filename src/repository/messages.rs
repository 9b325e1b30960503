use crate::{
    error::ClinicResult,
    models::messages::Message,
    storage::{JsonStore, StorageBackend, KEY_MESSAGES},
};

pub struct MessageRepository<'s, B> {
    store: &'s mut JsonStore<B>,
}

impl<'s, B: StorageBackend> MessageRepository<'s, B> {
    pub fn new(store: &'s mut JsonStore<B>) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> ClinicResult<Vec<Message>> {
        Ok(self.store.load_list(KEY_MESSAGES)?)
    }

    pub fn next_id(&mut self) -> ClinicResult<String> {
        let messages = self.list()?;
        Ok(crate::utils::next_id(
            "m",
            messages.iter().map(|m| m.id.as_str()),
        ))
    }

    pub fn insert(&mut self, message: Message) -> ClinicResult<()> {
        message.validate()?;
        self.store.push(KEY_MESSAGES, &message)?;
        Ok(())
    }
}
