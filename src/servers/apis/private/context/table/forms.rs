use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct TableForm {
    pub table_name: String,
}

#[derive(Deserialize, Debug)]
pub struct TableUserForm {
    pub table_name: String,
    pub username: String,
}
