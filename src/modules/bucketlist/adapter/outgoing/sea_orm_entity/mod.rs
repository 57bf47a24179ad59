pub mod bucketlists;
