use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct AnswerForm {
    pub table_name: String,
    pub column: String,
    pub answer: String,
}

#[derive(Deserialize, Debug)]
pub struct AnswerQuery {
    pub tablename: String,
    pub column: String,
}
