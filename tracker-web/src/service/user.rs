//! registration and tenant members

use crate::adapter::cmd::user::{UserAddCmd, UserRegisterCmd};
use crate::adapter::vo::user::UserVO;
use crate::error::AppError;
use crate::repo::model::{tenant, user};
use crate::repo::sea::{TenantRepo, UserRepo};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

fn to_vo(user: user::Model) -> UserVO {
    UserVO {
        id: user.id,
        tenant_id: user.tenant_id,
        name: user.name,
        username: user.username,
        phone: user.phone,
        email: user.email,
    }
}

fn taken(username: &str) -> AppError {
    AppError::MsgError(format!("username {} already exists", username))
}

/// Insert `user`. The unique index on `username` decides clashes, so two
/// concurrent sign-ups with one name still end in a 400.
async fn insert_user<C: ConnectionTrait>(db: &C, user: user::Model) -> Result<UserVO, AppError> {
    match UserRepo::insert_user_one(db, user.clone()).await {
        Ok(_) => Ok(to_vo(user)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(taken(&user.username)),
            _ => Err(AppError::from(e)),
        },
    }
}

fn new_user(
    tenant_id: String,
    username: String,
    password: &str,
    created_by: Option<&str>,
) -> Result<user::Model, AppError> {
    if username.is_empty() {
        return Err(AppError::MsgError("username is empty".to_string()));
    }
    let mut user = user::Model::new();
    user.tenant_id = tenant_id;
    user.username = username;
    user.password = tracker_crypto::hash_password(password)?;
    let by = created_by.unwrap_or(&user.id).to_string();
    user.created_by = by.clone();
    user.updated_by = by;
    Ok(user)
}

/// Public sign-up. Always opens a new tenant owned by the new user.
pub async fn register(db: &DatabaseConnection, cmd: UserRegisterCmd) -> Result<UserVO, AppError> {
    let username = cmd.username.trim().to_string();
    let tenant_name = cmd
        .tenant_name
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| username.clone());
    let mut user = new_user(String::new(), username, &cmd.password, None)?;
    user.name = cmd.name;
    user.email = cmd.email;
    user.phone = cmd.phone;
    user.remark = cmd.remark;

    let txn = db.begin().await?;
    user.tenant_id = TenantRepo::insert_tenant_one(&txn, tenant::Model::new(tenant_name)).await?;
    let vo = insert_user(&txn, user).await?;
    txn.commit().await?;
    tracing::info!("user {} registered in new tenant {}", vo.username, vo.tenant_id);
    Ok(vo)
}

/// Add a member to `tenant_id`; only reachable with a token of that tenant.
pub async fn add_member<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    user_id: &str,
    cmd: UserAddCmd,
) -> Result<UserVO, AppError> {
    TenantRepo::get_tenant_by_id(db, tenant_id).await?;
    let mut user = new_user(
        tenant_id.to_string(),
        cmd.username.trim().to_string(),
        &cmd.password,
        Some(user_id),
    )?;
    user.name = cmd.name;
    user.email = cmd.email;
    user.phone = cmd.phone;
    user.remark = cmd.remark;
    let vo = insert_user(db, user).await?;
    tracing::info!("user {} added to tenant {} by {}", vo.username, tenant_id, user_id);
    Ok(vo)
}

pub async fn user_info<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    user_id: &str,
) -> Result<UserVO, DbErr> {
    UserRepo::get_user_by_id(db, tenant_id, user_id).await.map(to_vo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::sea::tests::memory_db;

    fn register_cmd(username: &str) -> UserRegisterCmd {
        UserRegisterCmd {
            username: username.to_string(),
            password: "secret-pw".to_string(),
            phone: "123".to_string(),
            email: String::new(),
            remark: String::new(),
            name: String::new(),
            tenant_name: None,
        }
    }

    fn add_cmd(username: &str) -> UserAddCmd {
        UserAddCmd {
            username: username.to_string(),
            password: "secret-pw".to_string(),
            phone: "456".to_string(),
            email: String::new(),
            remark: String::new(),
            name: String::new(),
        }
    }

    #[tokio::test]
    async fn test_register_opens_own_tenant() {
        let db = memory_db().await;
        let alice = register(&db, register_cmd("alice")).await.unwrap();
        let bob = register(&db, register_cmd("bob")).await.unwrap();
        assert_ne!(alice.tenant_id, bob.tenant_id);
    }

    #[tokio::test]
    async fn test_username_clash_is_bad_request() {
        let db = memory_db().await;
        let alice = register(&db, register_cmd("alice")).await.unwrap();
        let err = register(&db, register_cmd("alice")).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "username alice already exists");
        // members share the same index
        let err = add_member(&db, &alice.tenant_id, &alice.id, add_cmd("alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MsgError(_)));
    }

    #[tokio::test]
    async fn test_add_member_joins_caller_tenant() {
        let db = memory_db().await;
        let alice = register(&db, register_cmd("alice")).await.unwrap();
        let carol = add_member(&db, &alice.tenant_id, &alice.id, add_cmd("carol"))
            .await
            .unwrap();
        assert_eq!(carol.tenant_id, alice.tenant_id);
        let row = UserRepo::get_user_by_id(&db, &alice.tenant_id, &carol.id)
            .await
            .unwrap();
        assert_eq!(row.created_by, alice.id);
        assert!(tracker_crypto::verify_password(&row.password, "secret-pw").unwrap());

        assert!(matches!(
            add_member(&db, "no-such-tenant", &alice.id, add_cmd("dave")).await,
            Err(AppError::NotFound(_))
        ));
    }
}
