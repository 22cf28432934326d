mod integration_test {
    pub mod setup;
    pub mod test_client;

    mod create_feed;
}
