use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| match user {
            Some(u) if u.password.verify(login.password) => Ok(u),
            _ => Err(Error::Credentials),
        })
}

pub fn get_user<R>(repo: &R, id: &Id) -> Result<User>
where
    R: UserRepo,
{
    Ok(repo.get_user(id)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{register::*, tests::MockDb, *},
        *,
    };

    #[test]
    fn login_with_correct_and_wrong_credentials() {
        let db = MockDb::default();
        let email: EmailAddress = "user@example.com".parse().unwrap();
        create_new_user(
            &db,
            NewUser {
                email: email.clone(),
                password: "secret".into(),
            },
        )
        .unwrap();

        let user = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(email, user.email);

        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "wrong",
                },
            ),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &"nobody@example.com".parse().unwrap(),
                    password: "secret",
                },
            ),
            Err(Error::Credentials)
        ));
    }
}
