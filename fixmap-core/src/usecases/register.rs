use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        email: u.email,
        password,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        let u = NewUser {
            email: "foo@bar.de".parse().unwrap(),
            password: "secret1".into(),
        };
        assert!(create_new_user(&db, u).is_ok());
        let u = NewUser {
            email: "baz@bar.de".parse().unwrap(),
            password: "secret2".into(),
        };
        assert!(create_new_user(&db, u).is_ok());
        assert!(db
            .get_user_by_email(&"foo@bar.de".parse().unwrap())
            .is_ok());
        assert!(db
            .get_user_by_email(&"baz@bar.de".parse().unwrap())
            .is_ok());
        assert_eq!(2, db.count_users().unwrap());
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        let u = NewUser {
            email: "foo@baz.io".parse().unwrap(),
            password: "short".into(),
        };
        assert!(matches!(create_new_user(&db, u), Err(Error::Password)));
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        let u = NewUser {
            email: "baz@foo.bar".parse().unwrap(),
            password: "secret".into(),
        };
        assert!(create_new_user(&db, u).is_ok());
        let u = NewUser {
            email: "baz@foo.bar".parse().unwrap(),
            password: "secret".into(),
        };
        assert!(matches!(create_new_user(&db, u), Err(Error::UserExists)));
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        let u = NewUser {
            email: "foo@bar.io".parse().unwrap(),
            password: "secret".into(),
        };
        assert!(create_new_user(&db, u).is_ok());
        assert!(db.users.borrow()[0].password.as_ref() != "secret");
        assert!(db.users.borrow()[0].password.verify("secret"));
    }
}
