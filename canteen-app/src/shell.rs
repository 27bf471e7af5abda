//! Line-oriented shell over an [`OrderingSession`]
//!
//! Each command maps to one session event; the affected panel is rendered
//! again afterwards.

use crate::cart::parse_quantity;
use crate::error::{OrderingError, OrderingResult};
use crate::presentation::{
    canteen_views, chat_views, order_views, recommendation_views, render_cart, stall_views,
    weekly_views,
};
use crate::session::{OrderingSession, today};
use canteen_client::CanteenApi;
use std::fmt::Write as _;

/// Dishes per day shown by `today` / `week`
const RECOMMENDATION_LIMIT: u32 = 5;

pub const HELP: &str = "\
canteens                      list canteens
stalls <canteen>              list stalls and dishes of a canteen
dish <id>                     open a dish
select <option> <value>       choose an option value for the open dish
add [qty]                     add the open dish to the cart
remove <n>                    remove cart line n
cart                          show the cart
lang                          switch display language
checkout                      submit the cart as an order
orders                        list your orders
pay <order>                   pay a pending order
rate <1-5> [comment]          rate the open dish
login <user> <password>       log in
register <user> <password> [email]
logout                        log out (clears the cart)
chat <text>                   ask the assistant
today                         today's recommendations
week                          this week's recommendations
help                          show this help
quit                          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Canteens,
    Stalls(i64),
    Dish(i64),
    Select { option_type: String, value: String },
    Add(i64),
    /// 1-based line number as shown in the cart
    Remove(usize),
    Cart,
    Lang,
    Checkout,
    Orders,
    Pay(i64),
    Rate { score: i32, comment: Option<String> },
    Login { username: String, password: String },
    Register { username: String, password: String, email: Option<String> },
    Logout,
    Chat(String),
    Today,
    Week,
    Help,
    Quit,
}

fn usage(text: &str) -> OrderingError {
    OrderingError::Validation(format!("usage: {text}"))
}

fn parse_id<T: std::str::FromStr>(arg: Option<&str>, text: &str) -> OrderingResult<T> {
    arg.and_then(|a| a.parse().ok()).ok_or_else(|| usage(text))
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> OrderingResult<Option<Command>> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match name.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "canteens" => Command::Canteens,
        "stalls" => Command::Stalls(parse_id(args.next(), "stalls <canteen>")?),
        "dish" => Command::Dish(parse_id(args.next(), "dish <id>")?),
        "select" => match (args.next(), args.next()) {
            (Some(option_type), Some(value)) => Command::Select {
                option_type: option_type.to_string(),
                value: value.to_string(),
            },
            _ => return Err(usage("select <option> <value>")),
        },
        "add" => Command::Add(match args.next() {
            Some(qty) => parse_quantity(qty)?,
            None => 1,
        }),
        "remove" => Command::Remove(parse_id(args.next(), "remove <n>")?),
        "cart" => Command::Cart,
        "lang" => Command::Lang,
        "checkout" => Command::Checkout,
        "orders" => Command::Orders,
        "pay" => Command::Pay(parse_id(args.next(), "pay <order>")?),
        "rate" => {
            let score = parse_id(args.next(), "rate <1-5> [comment]")?;
            let comment = rest
                .split_once(char::is_whitespace)
                .map(|(_, c)| c.trim().to_string())
                .filter(|c| !c.is_empty());
            Command::Rate { score, comment }
        }
        "login" => match (args.next(), args.next()) {
            (Some(username), Some(password)) => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            _ => return Err(usage("login <user> <password>")),
        },
        "register" => match (args.next(), args.next()) {
            (Some(username), Some(password)) => Command::Register {
                username: username.to_string(),
                password: password.to_string(),
                email: args.next().map(str::to_string),
            },
            _ => return Err(usage("register <user> <password> [email]")),
        },
        "logout" => Command::Logout,
        "chat" if !rest.is_empty() => Command::Chat(rest.to_string()),
        "chat" => return Err(usage("chat <text>")),
        "today" => Command::Today,
        "week" => Command::Week,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(OrderingError::Validation(format!(
                "unknown command: {other} (try `help`)"
            )));
        }
    };
    Ok(Some(command))
}

pub struct Shell<A: CanteenApi> {
    session: OrderingSession<A>,
}

impl<A: CanteenApi> Shell<A> {
    pub fn new(session: OrderingSession<A>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &OrderingSession<A> {
        &self.session
    }

    /// Message shown for a failed command
    pub async fn describe_error(&self, err: &OrderingError) -> String {
        let lang = self.session.language().await;
        let table = self.session.table();
        match err {
            OrderingError::NotLoggedIn => table.ui("please_login", lang).to_string(),
            other => format!("{}: {}", table.ui("error", lang), other.user_message()),
        }
    }

    /// Run one command and return the text to display
    pub async fn execute(&self, command: Command) -> OrderingResult<String> {
        let session = &self.session;
        let table = session.table();
        let lang = session.language().await;
        let ui = |key: &'static str| table.ui(key, lang).to_string();
        let mut out = String::new();

        match command {
            Command::Canteens => {
                let canteens = session.load_canteens().await?;
                let _ = writeln!(out, "{}", ui("header_canteen"));
                if canteens.is_empty() {
                    let _ = writeln!(out, "  {}", ui("no_canteens"));
                }
                for view in canteen_views(&canteens, lang, table) {
                    let _ = writeln!(out, "  {view}");
                }
            }
            Command::Stalls(canteen_id) => {
                let stalls = session.expand_canteen(canteen_id).await?;
                if stalls.is_empty() {
                    let _ = writeln!(out, "  {}", ui("no_stalls"));
                }
                for view in stall_views(&stalls, lang, table) {
                    let _ = write!(out, "{view}");
                }
            }
            Command::Dish(dish_id) => {
                session.open_dish(dish_id).await?;
                out = session.render().await.to_string();
            }
            Command::Select { option_type, value } => {
                session.select_option(&option_type, &value).await;
                out = session.render().await.to_string();
            }
            Command::Add(quantity) => {
                session.add_to_cart(quantity).await?;
                out = self.cart_text().await;
            }
            Command::Remove(n) => {
                if let Some(index) = n.checked_sub(1) {
                    session.remove_line(index).await;
                }
                out = self.cart_text().await;
            }
            Command::Cart => out = self.cart_text().await,
            Command::Lang => {
                session.toggle_language().await;
                out = session.render().await.to_string();
            }
            Command::Checkout => match session.checkout().await? {
                Some(created) => {
                    let lang = session.language().await;
                    let _ = writeln!(
                        out,
                        "{} {} {}",
                        table.ui("submit_success", lang),
                        table.ui("order_no", lang),
                        created.id
                    );
                    out.push_str(&self.cart_text().await);
                }
                None => out = self.cart_text().await,
            },
            Command::Orders => {
                let orders = session.list_orders().await?;
                if orders.is_empty() {
                    let _ = writeln!(out, "{}", ui("no_orders"));
                }
                for view in order_views(&orders, lang, table) {
                    let _ = write!(out, "{view}");
                }
            }
            Command::Pay(order_id) => {
                session.pay_order(order_id).await?;
                let _ = writeln!(out, "{}", ui("pay_success"));
                let orders = session.state().read().await.orders.clone();
                for view in order_views(&orders, lang, table) {
                    let _ = write!(out, "{view}");
                }
            }
            Command::Rate { score, comment } => {
                session.submit_rating(score, comment.as_deref()).await?;
                let _ = writeln!(out, "{}", ui("rating_success"));
                out.push_str(&session.render().await.to_string());
            }
            Command::Login { username, password } => {
                let user = session.login(&username, &password).await?;
                let _ = writeln!(out, "{}: {}", ui("login_success"), user.username);
            }
            Command::Register {
                username,
                password,
                email,
            } => {
                let user = session
                    .register(&username, &password, email.as_deref())
                    .await?;
                let _ = writeln!(out, "{}: {}", ui("register_success"), user.username);
            }
            Command::Logout => {
                session.logout().await;
                let _ = writeln!(out, "{}", ui("logout_success"));
            }
            Command::Chat(message) => {
                session.chat(&message).await?;
                let entries = session.state().read().await.chat.clone();
                let start = entries.len().saturating_sub(2);
                for line in chat_views(&entries[start..], lang, table) {
                    let _ = writeln!(out, "{line}");
                }
            }
            Command::Today => {
                let dishes = session
                    .daily_recommendations(None, RECOMMENDATION_LIMIT)
                    .await?;
                let _ = writeln!(out, "{}", ui("tab_today"));
                if dishes.is_empty() {
                    let _ = writeln!(out, "  {}", ui("no_recommendations"));
                }
                for view in recommendation_views(&dishes, lang, table) {
                    let _ = writeln!(out, "  {view}");
                }
            }
            Command::Week => {
                let weekly = session.weekly_recommendations(RECOMMENDATION_LIMIT).await?;
                let _ = writeln!(out, "{}", ui("week_recommendations"));
                for day in weekly_views(&weekly, Some(today()), lang, table) {
                    let marker = if day.is_today { format!(" ({})", ui("today")) } else { String::new() };
                    let _ = writeln!(out, "{}{marker}", day.name);
                    if day.dishes.is_empty() {
                        let _ = writeln!(out, "  {}", ui("no_recommendations"));
                    }
                    for view in &day.dishes {
                        let _ = writeln!(out, "  {view}");
                    }
                }
            }
            Command::Help => out = format!("{HELP}\n"),
            Command::Quit => {}
        }
        Ok(out)
    }

    async fn cart_text(&self) -> String {
        let state = self.session.state();
        let state = state.read().await;
        render_cart(&state.cart, state.language, self.session.table()).to_string()
    }
}
