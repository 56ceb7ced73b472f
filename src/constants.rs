/// Base URL for the TD Ameritrade REST API
pub const BASE_URL: &str = "https://api.tdameritrade.com/v1";
/// Default number of days to look back when fetching orders or transactions
pub const DAYS_TO_BACK_LOOK: i64 = 35;
/// Default maximum number of orders returned by an orders query
pub const DEFAULT_MAX_RESULTS: u32 = 50;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "tda-client/0.2.0";
/// Date format used by the orders and transactions endpoints
pub const DATE_FORMAT: &str = "%Y-%m-%d";
