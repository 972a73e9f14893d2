/// Load a local `.env`, if any. Returns whether one was found.
pub fn load_dotenv() -> bool {
    dotenv::dotenv().is_ok()
}
