use sea_orm::DatabaseConnection;

use crate::model::account::Role;
use crate::model::auth::{
    DeleteUserResponseDto, DeletedUserDto, LoginDto, LoginResponseDto, LoginUserDto, RegisterDto,
    RegisterResponseDto, RegisteredUserDto, VerifiedUserDto, VerifyResponseDto,
};
use crate::server::data::account::AccountRepository;
use crate::server::error::{domain::DomainError, Error};
use crate::server::identity::IdentityClient;
use crate::server::model::identity::CurrentIdentity;
use crate::server::service::account::{
    account_from_model, is_blank, require_fields, AccountForm, AccountService,
};

/// Service for the registration, login, verification, and account
/// removal flows that span the identity provider and the directory.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a IdentityClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, identity: &'a IdentityClient) -> Self {
        Self { db, identity }
    }

    /// Registers a new user with the provider and the directory.
    ///
    /// Everything is validated before the provider is contacted, so a
    /// rejected request creates nothing anywhere. The provider account
    /// is created first, then its role claim is set, then the directory
    /// row is inserted; a failure after the provider call leaves a
    /// provider account without a directory row behind.
    pub async fn register(&self, dto: RegisterDto) -> Result<RegisterResponseDto, Error> {
        let mut missing = Vec::new();
        if is_blank(&dto.name) {
            missing.push("name");
        }
        if is_blank(&dto.email) {
            missing.push("email");
        }
        if is_blank(&dto.password) {
            missing.push("password");
        }
        if is_blank(&dto.role) {
            missing.push("role");
        }
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))
            .into());
        }

        let role = dto
            .role
            .as_deref()
            .unwrap_or_default()
            .trim()
            .parse::<Role>()
            .map_err(DomainError::Validation)?;

        let form = AccountForm {
            name: dto.name,
            email: dto.email,
            external_id: None,
            field_of_study: dto.field_of_study,
            skills: dto.skills,
            resume: dto.resume,
            department: dto.department,
            tax_id: dto.tax_id,
        };

        require_fields(role, &form)?;

        let email = form.email.clone().unwrap_or_default();
        if AccountRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailTaken(email).into());
        }

        let provider_account = self
            .identity
            .create_user(
                &email,
                dto.password.as_deref().unwrap_or_default(),
                form.name.as_deref().unwrap_or_default(),
            )
            .await?;

        self.identity
            .set_role_claim(&provider_account.uid, role)
            .await?;

        let account = AccountService::new(self.db)
            .create(
                role,
                AccountForm {
                    external_id: Some(provider_account.uid.clone()),
                    ..form
                },
            )
            .await?;

        tracing::info!(
            email = %account.base().email,
            role = %role,
            "registered new user"
        );

        Ok(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            user: RegisteredUserDto {
                external_id: provider_account.uid,
                email: account.base().email.clone(),
                name: account.base().name.clone(),
                role,
                id: account.base().id,
            },
        })
    }

    /// Resolves a directory record by email.
    ///
    /// Password verification happens against the provider on the client
    /// side; this endpoint only answers whether the email has a
    /// directory record and which role it carries.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto, Error> {
        if is_blank(&dto.email) {
            return Err(
                DomainError::Validation("Missing required fields: email".to_string()).into(),
            );
        }

        let account = AccountRepository::new(self.db)
            .find_by_email(dto.email.as_deref().unwrap_or_default())
            .await?
            .ok_or(DomainError::NotFound("Account"))?;

        let account = account_from_model(account)?;

        Ok(LoginResponseDto {
            message: "Login successful".to_string(),
            user: LoginUserDto {
                id: account.base().id,
                name: account.base().name.clone(),
                email: account.base().email.clone(),
                role: account.role(),
            },
        })
    }

    /// Returns the caller's directory record joined with their verified
    /// token identity.
    pub async fn verify(&self, caller: &CurrentIdentity) -> Result<VerifyResponseDto, Error> {
        let account = AccountRepository::new(self.db)
            .find_by_email(&caller.email)
            .await?
            .ok_or(DomainError::NotFound("Account"))?;

        let account = account_from_model(account)?;

        Ok(VerifyResponseDto {
            user: VerifiedUserDto {
                external_id: caller.external_id.clone(),
                email: account.base().email.clone(),
                name: account.base().name.clone(),
                role: account.role(),
                id: account.base().id,
            },
        })
    }

    /// Removes a user from the provider and the directory.
    ///
    /// Provider first; a directory row that is already gone afterwards
    /// reports not found even though the provider account was removed.
    pub async fn delete_user(&self, external_id: &str) -> Result<DeleteUserResponseDto, Error> {
        self.identity.delete_user(external_id).await?;

        let repository = AccountRepository::new(self.db);
        let account = repository
            .find_by_external_id(external_id)
            .await?
            .ok_or(DomainError::NotFound("Account"))?;

        repository.delete_by_id(account.id).await?;

        tracing::info!(email = %account.email, "deleted user");

        Ok(DeleteUserResponseDto {
            message: "User deleted successfully".to_string(),
            deleted_user: DeletedUserDto {
                external_id: account
                    .external_id
                    .unwrap_or_else(|| external_id.to_string()),
                email: account.email,
                name: account.name,
            },
        })
    }
}
