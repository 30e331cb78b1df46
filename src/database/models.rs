#[derive(Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub team: String,
}
