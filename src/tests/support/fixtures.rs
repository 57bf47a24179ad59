use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;
use crate::modules::item::application::ports::outgoing::ItemResult;

pub fn bucketlist_result(owner: i32, id: i32, name: &str) -> BucketlistResult {
    BucketlistResult {
        id,
        name: name.to_string(),
        date_created: Utc::now(),
        date_modified: Utc::now(),
        created_by: UserId::from(owner),
    }
}

pub fn item_result(bucketlist_id: i32, id: i32, name: &str, done: bool) -> ItemResult {
    ItemResult {
        id,
        name: name.to_string(),
        date_created: Utc::now(),
        date_modified: Utc::now(),
        bucketlist_id,
        done,
    }
}
