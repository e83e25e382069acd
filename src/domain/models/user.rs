use super::role::Role;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_verified_email: bool,
    pub is_verified_phone: bool,
    pub verification_code_email: Option<u32>,
    pub verification_code_phone: Option<u32>,
    pub role: Role,
}

impl User {
    pub fn is_verified(&self, contact: &Contact) -> bool {
        match contact {
            Contact::Email(_) => self.is_verified_email,
            Contact::Phone(_) => self.is_verified_phone,
        }
    }

    pub fn verification_code(&self, contact: &Contact) -> Option<u32> {
        match contact {
            Contact::Email(_) => self.verification_code_email,
            Contact::Phone(_) => self.verification_code_phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Registration {
    /// Every contact the new user supplied.
    pub fn contacts(&self) -> Vec<Contact> {
        let mut contacts = Vec::with_capacity(2);

        if let Some(email) = &self.email {
            contacts.push(Contact::Email(email.to_owned()));
        }
        if let Some(phone) = &self.phone {
            contacts.push(Contact::Phone(phone.to_owned()));
        }

        contacts
    }

    /// The contact a confirmation code is sent to: phone when present.
    pub fn confirmation_contact(&self) -> Option<Contact> {
        self.phone
            .as_ref()
            .map(|phone| Contact::Phone(phone.to_owned()))
            .or_else(|| self.email.as_ref().map(|email| Contact::Email(email.to_owned())))
    }
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub verification_code_email: Option<u32>,
    pub verification_code_phone: Option<u32>,
    pub role: Role,
}

impl CreateUser {
    pub fn new(registration: Registration, contact: &Contact, code: u32) -> Self {
        let (verification_code_email, verification_code_phone) = match contact {
            Contact::Email(_) => (Some(code), None),
            Contact::Phone(_) => (None, Some(code)),
        };

        CreateUser {
            name: registration.name,
            surname: registration.surname,
            patronymic: registration.patronymic,
            email: registration.email,
            phone: registration.phone,
            verification_code_email,
            verification_code_phone,
            role: Role::default(),
        }
    }
}

/// A verification channel and its address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    Email(String),
    Phone(String),
}

impl Contact {
    pub fn value(&self) -> &str {
        match self {
            Self::Email(email) => email,
            Self::Phone(phone) => phone,
        }
    }

    pub fn code_column(&self) -> &'static str {
        match self {
            Self::Email(_) => "verification_code_email",
            Self::Phone(_) => "verification_code_phone",
        }
    }

    pub fn verified_column(&self) -> &'static str {
        match self {
            Self::Email(_) => "is_verified_email",
            Self::Phone(_) => "is_verified_phone",
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email(_) => write!(f, "email"),
            Self::Phone(_) => write!(f, "phone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(email: Option<&str>, phone: Option<&str>) -> Registration {
        Registration {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: None,
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn test_phone_is_preferred_for_confirmation() {
        let registration = registration(Some("ivan@mail.com"), Some("+79990001122"));

        assert_eq!(
            registration.confirmation_contact(),
            Some(Contact::Phone("+79990001122".to_string()))
        );
        assert_eq!(registration.contacts().len(), 2);
    }

    #[test]
    fn test_email_confirmation_without_phone() {
        let registration = registration(Some("ivan@mail.com"), None);
        let contact = registration.confirmation_contact().unwrap();

        let user = CreateUser::new(registration, &contact, 123456);

        assert_eq!(user.verification_code_email, Some(123456));
        assert_eq!(user.verification_code_phone, None);
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_no_contact() {
        assert_eq!(registration(None, None).confirmation_contact(), None);
    }
}
