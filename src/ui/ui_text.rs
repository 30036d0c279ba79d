use std::sync::LazyLock;

pub const ICON_CLOSE: &str = "✖";
pub const ICON_PLUS: &str = "➕";
pub const ICON_STOP: &str = "⏹";
pub const ICON_PLAY: &str = "▶";
pub const ICON_WARNING: &str = "⚠";

pub struct UiText {
    pub app_title: String,

    // --- Setup screen ---
    pub setup_heading: String,
    pub label_game_url: String,
    pub hint_game_url: String,
    pub label_player_name: String,
    pub hint_player_name: String,
    pub label_alias: String,
    pub hint_alias: String,
    pub button_add: String,
    pub button_start: String,
    pub label_verifying: String,

    // --- Registry lists ---
    pub heading_games: String,
    pub heading_aliases: String,
    pub label_uses_cents: String,
    pub hover_uses_cents: String,
    pub button_remove: String,
    pub label_no_games: String,
    pub label_no_aliases: String,

    // --- Tracking screen ---
    pub tracking_heading: String,
    pub label_profit_loss: String,
    pub label_loading: String,
    pub label_waiting_first_poll: String,
    pub label_paused: String,
    pub label_last_update: String,
    pub button_stop: String,

    // --- Results table ---
    pub table_header_game: String,
    pub table_header_profit: String,
    pub table_total: String,
    pub table_errors_note: String,

    // --- Chart ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,

    // --- Messages ---
    pub err_player_name: String,
    pub err_no_games: String,
    pub err_start_prefix: String,
    pub err_server_prefix: String,
    pub err_no_results: String,

    // --- Debug overlay ---
    pub debug_heading: String,
    pub debug_games: String,
    pub debug_last_poll: String,
    pub debug_history: String,
    pub debug_last_profit: String,
    pub debug_error: String,
    pub debug_timer: String,
    pub debug_none: String,

    pub icon_close: String,
    pub icon_warning: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "PokerNow Tracker".to_string(),

    setup_heading: "Game Setup".to_string(),
    label_game_url: "Add Game URL".to_string(),
    hint_game_url: "https://www.pokernow.club/games/...".to_string(),
    label_player_name: "Your Player Name".to_string(),
    hint_player_name: "Enter your player name".to_string(),
    label_alias: "Add Player Alias".to_string(),
    hint_alias: "Alternative player name".to_string(),
    button_add: format!("{} Add", ICON_PLUS),
    button_start: format!("{} Start Tracking", ICON_PLAY),
    label_verifying: "Checking results...".to_string(),

    heading_games: "Current Games".to_string(),
    heading_aliases: "Current Aliases".to_string(),
    label_uses_cents: "Uses cents".to_string(),
    hover_uses_cents: "This game reports profit in cents; divide by 100".to_string(),
    button_remove: "Remove".to_string(),
    label_no_games: "No games added yet".to_string(),
    label_no_aliases: "No aliases".to_string(),

    tracking_heading: "Tracking Results".to_string(),
    label_profit_loss: "Profit/Loss".to_string(),
    label_loading: "Loading results...".to_string(),
    label_waiting_first_poll: "Waiting for the first results".to_string(),
    label_paused: "Paused while the window is hidden".to_string(),
    label_last_update: "Last change".to_string(),
    button_stop: format!("{} Stop Tracking", ICON_STOP),

    table_header_game: "Game".to_string(),
    table_header_profit: "Profit/Loss".to_string(),
    table_total: "TOTAL".to_string(),
    table_errors_note: " (Some games had errors)".to_string(),

    plot_x_axis: "Time".to_string(),
    plot_y_axis: "Profit".to_string(),

    err_player_name: "Please enter your player name".to_string(),
    err_no_games: "Please add at least one game URL".to_string(),
    err_start_prefix: "Error starting tracking: ".to_string(),
    err_server_prefix: "Error connecting to server: ".to_string(),
    err_no_results: "No results received".to_string(),

    debug_heading: "Debug Info".to_string(),
    debug_games: "gamesCount".to_string(),
    debug_last_poll: "lastPoll".to_string(),
    debug_history: "historyPoints".to_string(),
    debug_last_profit: "lastProfit".to_string(),
    debug_error: "errors".to_string(),
    debug_timer: "timer".to_string(),
    debug_none: "null".to_string(),

    icon_close: ICON_CLOSE.to_string(),
    icon_warning: ICON_WARNING.to_string(),
});
