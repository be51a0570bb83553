pub mod test_with_db;

use fake::uuid::UUIDv4;
use fake::Fake;
use liking::entities::like::Like;

#[allow(dead_code)]
pub fn fake_id() -> String {
    UUIDv4.fake::<uuid::Uuid>().to_string()
}

#[allow(dead_code)]
pub fn ids(likes: &[Like]) -> Vec<&str> {
    likes.iter().map(|l| l.id.as_str()).collect()
}
