use serde::{Deserialize, Serialize};
use trustwire_types::{
    Address, Item, LoginStatus, PaymentMethod, SocialSignOnType, SubmissionStatus,
    TransactionStatus, TransactionType,
};

/// Account creation and initial user details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateAccount {
    /// The user's account ID according to the application's own systems.
    ///
    /// User IDs are case sensitive on the vendor side; applications may
    /// need to normalize capitalization before reporting.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Session ID tying actions before and after account creation.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Email address of the new account.
    #[serde(rename = "$user_email", skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Full name of the user.
    #[serde(rename = "$name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary phone number, starting with the country code.
    #[serde(rename = "$phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ID of the user who referred this one.
    #[serde(rename = "$referrer_user_id", skip_serializing_if = "Option::is_none")]
    pub referrer_user_id: Option<String>,
    /// Payment instruments registered at sign-up, in the order given.
    #[serde(rename = "$payment_methods", skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    /// Billing address entered at sign-up.
    #[serde(rename = "$billing_address", skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Social identity provider used to sign up, if any.
    #[serde(
        rename = "$social_sign_on_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_sign_on_type: Option<SocialSignOnType>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Changes to an existing account's details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Whether the password was changed in this update.
    #[serde(rename = "$changed_password", skip_serializing_if = "Option::is_none")]
    pub changed_password: Option<bool>,
    /// Updated email address.
    #[serde(rename = "$user_email", skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Updated full name.
    #[serde(rename = "$name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Updated phone number.
    #[serde(rename = "$phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ID of the user who referred this one.
    #[serde(rename = "$referrer_user_id", skip_serializing_if = "Option::is_none")]
    pub referrer_user_id: Option<String>,
    /// Payment instruments on file after the update, in order.
    #[serde(rename = "$payment_methods", skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    /// Billing address on file after the update.
    #[serde(rename = "$billing_address", skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Social identity provider linked to the account, if any.
    #[serde(
        rename = "$social_sign_on_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_sign_on_type: Option<SocialSignOnType>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// A submitted order for products or services.
///
/// Ideally carries the items ordered, the payment instruments proposed,
/// and user identification data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateOrder {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Session ID tying actions before and after log in.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// ID for tracking this order in the application's systems.
    #[serde(rename = "$order_id", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Email address the order was placed under.
    #[serde(rename = "$user_email", skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Total transaction amount in micros of `currency_code`.
    ///
    /// 1 cent = 10,000 micros; $1.23 USD = 1,230,000 micros.
    #[serde(rename = "$amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// ISO-4217 currency code for `amount`.
    #[serde(rename = "$currency_code", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Billing address as entered by the user.
    #[serde(rename = "$billing_address", skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Payment instruments proposed for this order, in order.
    #[serde(rename = "$payment_methods", skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    /// Shipping address as entered by the user.
    #[serde(rename = "$shipping_address", skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Whether the user requested expedited shipping.
    #[serde(
        rename = "$expedited_shipping",
        skip_serializing_if = "Option::is_none"
    )]
    pub expedited_shipping: Option<bool>,
    /// Items ordered, in the order submitted.
    #[serde(rename = "$items", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// For marketplaces, the seller's user ID.
    #[serde(rename = "$seller_user_id", skip_serializing_if = "Option::is_none")]
    pub seller_user_id: Option<String>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// An attempt to exchange money, reported at each status change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Email address attached to the transaction.
    #[serde(rename = "$user_email", skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Kind of money movement.
    #[serde(rename = "$transaction_type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Outcome reported by the processor.
    #[serde(
        rename = "$transaction_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_status: Option<TransactionStatus>,
    /// Amount in micros of `currency_code`.
    #[serde(rename = "$amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// ISO-4217 currency code for `amount`.
    #[serde(rename = "$currency_code", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// ID for tracking this transaction in the application's systems.
    #[serde(rename = "$transaction_id", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Billing address for the instrument used.
    #[serde(rename = "$billing_address", skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// The single payment instrument used.
    #[serde(rename = "$payment_method", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Shipping address for the transaction, if any.
    #[serde(rename = "$shipping_address", skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Session ID tying this transaction to the user's browsing session.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// For marketplaces, the seller's user ID.
    #[serde(rename = "$seller_user_id", skip_serializing_if = "Option::is_none")]
    pub seller_user_id: Option<String>,
    /// For `$transfer` transactions, the receiving user's ID.
    #[serde(
        rename = "$transfer_recipient_user_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_recipient_user_id: Option<String>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// A login attempt, successful or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Login {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Session ID for the session attempting to log in.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Outcome of the attempt.
    #[serde(rename = "$login_status", skip_serializing_if = "Option::is_none")]
    pub login_status: Option<LoginStatus>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// An explicit logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Logout {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Associates data from an anonymous session with a known user.
///
/// Generally used only in anonymous checkout workflows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkSessionToUser {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The session being linked.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// An item placed into the shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddItemToCart {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Session ID for the browsing session.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// The item added.
    #[serde(rename = "$item", skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// An item removed from the shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveItemFromCart {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Session ID for the browsing session.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// The item removed.
    #[serde(rename = "$item", skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// User-generated review content submitted for another user or product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmitReview {
    /// The user's account ID according to the application's own systems.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Body of the review.
    #[serde(rename = "$content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Title of the review.
    #[serde(rename = "$review_title", skip_serializing_if = "Option::is_none")]
    pub review_title: Option<String>,
    /// ID of the user being reviewed, if the review targets a user.
    #[serde(rename = "$reviewed_user_id", skip_serializing_if = "Option::is_none")]
    pub reviewed_user_id: Option<String>,
    /// Moderation disposition of the submission.
    #[serde(
        rename = "$submission_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub submission_status: Option<SubmissionStatus>,
    /// Session ID for the browsing session.
    #[serde(rename = "$session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// A message sent from one user to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendMessage {
    /// The sending user's account ID.
    #[serde(rename = "$user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The receiving user's account ID.
    #[serde(
        rename = "$recipient_user_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub recipient_user_id: Option<String>,
    /// Message subject.
    #[serde(rename = "$subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body.
    #[serde(rename = "$content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Event time, seconds since the Unix epoch.
    #[serde(rename = "$time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// A reported user-activity event, discriminated on the wire by `"$type"`.
///
/// The discriminator is fixed by the variant at construction and always
/// serialized under the `"$type"` key, with the payload's aliased fields
/// alongside it. Two events of different variants are never equal, no
/// matter how their payload fields coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Event {
    /// `$create_account`
    #[serde(rename = "$create_account")]
    CreateAccount(CreateAccount),
    /// `$update_account`
    #[serde(rename = "$update_account")]
    UpdateAccount(UpdateAccount),
    /// `$create_order`
    #[serde(rename = "$create_order")]
    CreateOrder(CreateOrder),
    /// `$transaction`
    #[serde(rename = "$transaction")]
    Transaction(Transaction),
    /// `$login`
    #[serde(rename = "$login")]
    Login(Login),
    /// `$logout`
    #[serde(rename = "$logout")]
    Logout(Logout),
    /// `$link_session_to_user`
    #[serde(rename = "$link_session_to_user")]
    LinkSessionToUser(LinkSessionToUser),
    /// `$add_item_to_cart`
    #[serde(rename = "$add_item_to_cart")]
    AddItemToCart(AddItemToCart),
    /// `$remove_item_from_cart`
    #[serde(rename = "$remove_item_from_cart")]
    RemoveItemFromCart(RemoveItemFromCart),
    /// `$submit_review`
    #[serde(rename = "$submit_review")]
    SubmitReview(SubmitReview),
    /// `$send_message`
    #[serde(rename = "$send_message")]
    SendMessage(SendMessage),
}

impl Event {
    /// The wire discriminator literal for this event's concrete kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::CreateAccount(_) => "$create_account",
            Event::UpdateAccount(_) => "$update_account",
            Event::CreateOrder(_) => "$create_order",
            Event::Transaction(_) => "$transaction",
            Event::Login(_) => "$login",
            Event::Logout(_) => "$logout",
            Event::LinkSessionToUser(_) => "$link_session_to_user",
            Event::AddItemToCart(_) => "$add_item_to_cart",
            Event::RemoveItemFromCart(_) => "$remove_item_from_cart",
            Event::SubmitReview(_) => "$submit_review",
            Event::SendMessage(_) => "$send_message",
        }
    }

    /// Event time, seconds since the Unix epoch, if the caller set one.
    pub fn time(&self) -> Option<i64> {
        match self {
            Event::CreateAccount(e) => e.time,
            Event::UpdateAccount(e) => e.time,
            Event::CreateOrder(e) => e.time,
            Event::Transaction(e) => e.time,
            Event::Login(e) => e.time,
            Event::Logout(e) => e.time,
            Event::LinkSessionToUser(e) => e.time,
            Event::AddItemToCart(e) => e.time,
            Event::RemoveItemFromCart(e) => e.time,
            Event::SubmitReview(e) => e.time,
            Event::SendMessage(e) => e.time,
        }
    }
}
