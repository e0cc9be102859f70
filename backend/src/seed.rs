//! Demo users inserted at startup when `users.seed` is enabled.

use chrono::Utc;
use gox_common::User;
use uuid::{uuid, Uuid};

pub const OLIVIA_ID: Uuid = uuid!("d9b5a4b1-d1d1-4d92-a14b-441a5e5a5ae5");
pub const FAITH_ID: Uuid = uuid!("d9b5a4b1-d1d1-4d92-a14b-441a5e5a5ae6");

pub fn demo_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User::new(OLIVIA_ID, "Olivia", "Ponton", "olivia.ponton@example.com", now),
        User::new(FAITH_ID, "Faith", "Ordway", "faith.ordway@godess.com", now),
    ]
}
