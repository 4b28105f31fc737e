//! Demo records loaded at startup

use std::time::Duration;

use chrono::NaiveDate;
use contracts::domain::a001_user::aggregate::{User, UserRole, UserStatus};
use contracts::domain::a002_company::aggregate::{Company, CompanyKind, CompanyStatus};
use contracts::domain::a003_purchase::aggregate::{Purchase, PurchaseStatus};
use contracts::domain::a004_shortage::aggregate::Shortage;

use super::{InMemoryRepository, Store};

#[allow(clippy::too_many_arguments)]
fn user(
    code: &str,
    name: &str,
    email: &str,
    company: &str,
    role: UserRole,
    status: UserStatus,
    last_active: &str,
    initials: &str,
) -> User {
    let mut user = User::new_for_insert(
        code.into(),
        name.into(),
        email.into(),
        company.into(),
        role,
        status,
    );
    user.last_active = last_active.into();
    user.initials = initials.into();
    user
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "USR-0001",
            "Admin User",
            "admin@visulab.com",
            "Matriz",
            UserRole::Administrator,
            UserStatus::Active,
            "Now",
            "AD",
        ),
        user(
            "USR-0002",
            "João Silva",
            "joao@oticas.com",
            "Óticas Vision",
            UserRole::User,
            UserStatus::Active,
            "2 hours ago",
            "JS",
        ),
        user(
            "USR-0003",
            "Maria Souza",
            "maria@lab.com",
            "Laboratório Central",
            UserRole::User,
            UserStatus::Inactive,
            "5 days ago",
            "MS",
        ),
    ]
}

fn company(
    display_id: &str,
    name: &str,
    kind: CompanyKind,
    contact_name: &str,
    contact_email: &str,
    initials: &str,
) -> Company {
    let mut company = Company::new_for_insert(
        display_id.into(),
        name.into(),
        kind,
        contact_name.into(),
        contact_email.into(),
        CompanyStatus::Active,
    );
    company.initials = initials.into();
    company
}

pub fn companies() -> Vec<Company> {
    vec![
        company(
            "#CP-0001",
            "Matriz",
            CompanyKind::Headquarters,
            "Roberto",
            "admin@visulab.com",
            "MT",
        ),
        company(
            "#CP-0002",
            "Óticas Vision",
            CompanyKind::Branch,
            "Manager João",
            "contato@vision.com",
            "OV",
        ),
        company(
            "#CP-0003",
            "Laboratório Central",
            CompanyKind::Supplier,
            "Sup. Maria",
            "maria@lab.com",
            "LC",
        ),
    ]
}

pub fn purchases() -> Vec<Purchase> {
    let date = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default();
    vec![
        Purchase::new_for_insert(
            "#PO-1001".into(),
            "Essilor International".into(),
            date(24),
            "50x Varilux lenses".into(),
            4500.00,
            PurchaseStatus::Received,
        ),
        Purchase::new_for_insert(
            "#PO-1002".into(),
            "Hoya Corporation".into(),
            date(25),
            "30x VS blanks".into(),
            2100.50,
            PurchaseStatus::Pending,
        ),
    ]
}

pub fn shortages() -> Vec<Shortage> {
    let rows: [(&str, &str, &str, &str, &str, &str, u32, &str); 4] = [
        ("1.56", "+2.00 -1.00", "Admin User", "HMC", "Matriz", "5 min ago", 2, "Single Vision"),
        ("1.49", "-1.50 -0.50", "João Silva", "Blue Cut", "Óticas Vision", "1 hour ago", 1, "Single Vision"),
        ("1.67", "+4.00 -2.00", "Maria Souza", "AR Premium", "Laboratório Central", "3 hours ago", 1, "Multifocal"),
        ("1.59", "Plano -0.75", "Admin User", "Incolor", "Matriz", "1 day ago", 4, "Single Vision"),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(n, (index, esf_cil, user, treatment, company, time, quantity, lens_type))| {
                Shortage::new_for_insert(
                    format!("SH-{:04}", n + 1),
                    index.to_string(),
                    esf_cil.to_string(),
                    user.to_string(),
                    treatment.to_string(),
                    company.to_string(),
                    time.to_string(),
                    *quantity,
                    lens_type.to_string(),
                )
            },
        )
        .collect()
}

/// Store holding the demo records, listed in the order above
pub fn seeded_store(latency: Duration) -> Store {
    let store = Store {
        users: InMemoryRepository::with_items(users(), latency),
        companies: InMemoryRepository::with_items(companies(), latency),
        purchases: InMemoryRepository::with_items(purchases(), latency),
        shortages: InMemoryRepository::with_items(shortages(), latency),
    };
    tracing::info!("Mock data seeded");
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::Repository;

    #[tokio::test]
    async fn test_seeded_store() {
        let store = seeded_store(Duration::ZERO);
        assert_eq!(store.users.list().await.unwrap().len(), 3);
        assert_eq!(store.companies.list().await.unwrap().len(), 3);

        let purchases = store.purchases.list().await.unwrap();
        assert_eq!(purchases[0].display_id(), "#PO-1001");
        assert_eq!(purchases[1].supplier_initials, "H");

        let shortages = store.shortages.list().await.unwrap();
        assert_eq!(shortages.len(), 4);
        assert_eq!(shortages[3].esf_cil, "Plano -0.75");
        assert_eq!(shortages[3].quantity, 4);
    }

    #[test]
    fn test_seed_records_are_valid() {
        assert!(users().iter().all(|u| u.validate().is_ok()));
        assert!(companies().iter().all(|c| c.validate().is_ok()));
        assert!(purchases().iter().all(|p| p.validate().is_ok()));
        assert!(shortages().iter().all(|s| s.validate().is_ok()));
    }
}
