use fhub_domain::collections::{CollectionDef, FieldDef};
use fhub_domain::constants::USERS;

pub const ADMIN_ROLE: &str = "admin";
pub const EDITOR_ROLE: &str = "editor";

/// Collections contributed by the users slice.
#[must_use]
pub fn collections() -> Vec<CollectionDef> {
    vec![
        CollectionDef::new(USERS, "Users")
            .field(FieldDef::email("email").required().unique())
            .field(FieldDef::text("name"))
            .field(FieldDef::select("role", [ADMIN_ROLE, EDITOR_ROLE]).required()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::collections::FieldKind;

    #[test]
    fn users_collection_shape() {
        let defs = collections();
        assert_eq!(defs.len(), 1);

        let users = &defs[0];
        assert_eq!(users.slug, USERS);
        assert!(users.timestamps);

        let email = users.find_field("email").expect("email field");
        assert!(email.required && email.unique);
        assert_eq!(email.kind, FieldKind::Email);

        let role = users.find_field("role").expect("role field");
        assert!(matches!(&role.kind, FieldKind::Select { options } if options.len() == 2));
    }
}
