use crate::domain::model::Record;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, data: Vec<Record>) -> Result<Vec<Record>>;
    fn load(&self, data: &[Record]) -> Result<String>;
}
