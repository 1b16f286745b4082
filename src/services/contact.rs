//! Contact operations.
use crate::domain::contact::Contact;
use crate::dto::contact::ContactDTO;
use crate::lookup::resolve_contact_identifier;
use crate::repository::ContactRepository;
use crate::services::{remote, ServiceResult};

/// Provides interaction with contact data through a [`ContactRepository`].
pub struct ContactService<R> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetches one contact by native record id. Contacts have no
    /// external-field fallback, so anything that is not a 15/18 character
    /// record id fails before the repository is touched.
    pub fn get_contact(&self, id: &str) -> ServiceResult<ContactDTO> {
        resolve_contact_identifier(id)?;

        self.repo
            .get_contact(id)
            .map_err(remote("get contact", id))
    }

    /// All contact records carrying the given auth token.
    pub fn get_contacts_by_auth_id(&self, auth_id: &str) -> ServiceResult<Vec<ContactDTO>> {
        let query = self.repo.by_auth_id_query(auth_id)?;

        self.repo
            .query_contacts(&query)
            .map_err(remote("query contacts by auth id", auth_id))
    }

    /// All contact records sharing the given auth email.
    pub fn get_contacts_by_email(&self, email: &str) -> ServiceResult<Vec<ContactDTO>> {
        let query = self.repo.by_email_query(email)?;

        self.repo
            .query_contacts(&query)
            .map_err(remote("query contacts by email", email))
    }

    /// All contact records whose record id appears in the batch.
    pub fn get_contacts_by_ids(&self, ids: &[String]) -> ServiceResult<Vec<ContactDTO>> {
        let query = self.repo.by_ids_query(ids)?;

        self.repo
            .query_contacts(&query)
            .map_err(remote("query contacts by ids", ids.join(",")))
    }

    /// Runs a raw contact query.
    pub fn query_contacts(&self, query: &str) -> ServiceResult<Vec<ContactDTO>> {
        self.repo
            .query_contacts(query)
            .map_err(remote("query contacts", query))
    }

    /// Updates a contact. The DTO is converted through the entity and back
    /// so every invariant is re-checked before the remote write.
    pub fn update_contact(&self, dto: &ContactDTO) -> ServiceResult<()> {
        let contact = Contact::try_from(dto)?;
        let validated = ContactDTO::from(&contact);

        self.repo
            .update_contact(&validated)
            .map_err(remote("update contact", validated.sales_force_id.clone()))
    }
}
