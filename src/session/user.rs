/// The logged-in user. No relationship to catalog entities.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub is_admin: bool,
}
