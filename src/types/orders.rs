//! Order-related types for the Lighter signer

use crate::error::LighterError;
use crate::types::constants::{cancel_all_tif, order_types, time_in_force};
use serde::{Deserialize, Serialize};

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum OrderType {
    /// Limit order (order_type = 0)
    Limit,
    /// Market order (order_type = 1)
    Market,
    /// Stop loss market order (order_type = 2)
    StopLoss,
    /// Stop loss limit order (order_type = 3)
    StopLossLimit,
    /// Take profit market order (order_type = 4)
    TakeProfit,
    /// Take profit limit order (order_type = 5)
    TakeProfitLimit,
    /// TWAP order (order_type = 6)
    Twap,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
            OrderType::StopLoss => write!(f, "stop-loss"),
            OrderType::StopLossLimit => write!(f, "stop-loss-limit"),
            OrderType::TakeProfit => write!(f, "take-profit"),
            OrderType::TakeProfitLimit => write!(f, "take-profit-limit"),
            OrderType::Twap => write!(f, "twap"),
        }
    }
}

impl TryFrom<i32> for OrderType {
    type Error = LighterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            order_types::LIMIT => Ok(OrderType::Limit),
            order_types::MARKET => Ok(OrderType::Market),
            order_types::STOP_LOSS => Ok(OrderType::StopLoss),
            order_types::STOP_LOSS_LIMIT => Ok(OrderType::StopLossLimit),
            order_types::TAKE_PROFIT => Ok(OrderType::TakeProfit),
            order_types::TAKE_PROFIT_LIMIT => Ok(OrderType::TakeProfitLimit),
            order_types::TWAP => Ok(OrderType::Twap),
            other => Err(LighterError::invalid_parameter(format!(
                "Unknown order type: {}",
                other
            ))),
        }
    }
}

impl From<OrderType> for i32 {
    fn from(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Limit => order_types::LIMIT,
            OrderType::Market => order_types::MARKET,
            OrderType::StopLoss => order_types::STOP_LOSS,
            OrderType::StopLossLimit => order_types::STOP_LOSS_LIMIT,
            OrderType::TakeProfit => order_types::TAKE_PROFIT,
            OrderType::TakeProfitLimit => order_types::TAKE_PROFIT_LIMIT,
            OrderType::Twap => order_types::TWAP,
        }
    }
}

/// Time in force for a single order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TimeInForce {
    /// Immediate or cancel (0)
    ImmediateOrCancel,
    /// Good till time (1)
    GoodTillTime,
    /// Post only (2)
    PostOnly,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::ImmediateOrCancel => write!(f, "ioc"),
            TimeInForce::GoodTillTime => write!(f, "gtt"),
            TimeInForce::PostOnly => write!(f, "post-only"),
        }
    }
}

impl TryFrom<i32> for TimeInForce {
    type Error = LighterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            time_in_force::IMMEDIATE_OR_CANCEL => Ok(TimeInForce::ImmediateOrCancel),
            time_in_force::GOOD_TILL_TIME => Ok(TimeInForce::GoodTillTime),
            time_in_force::POST_ONLY => Ok(TimeInForce::PostOnly),
            other => Err(LighterError::invalid_parameter(format!(
                "Unknown time in force: {}",
                other
            ))),
        }
    }
}

impl From<TimeInForce> for i32 {
    fn from(tif: TimeInForce) -> Self {
        match tif {
            TimeInForce::ImmediateOrCancel => time_in_force::IMMEDIATE_OR_CANCEL,
            TimeInForce::GoodTillTime => time_in_force::GOOD_TILL_TIME,
            TimeInForce::PostOnly => time_in_force::POST_ONLY,
        }
    }
}

/// Time in force for a cancel-all request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CancelAllTimeInForce {
    /// Cancel immediately (0)
    Immediate,
    /// Schedule a cancel-all at `time` (1)
    Scheduled,
    /// Abort a previously scheduled cancel-all (2)
    Abort,
}

impl TryFrom<i32> for CancelAllTimeInForce {
    type Error = LighterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            cancel_all_tif::IMMEDIATE => Ok(CancelAllTimeInForce::Immediate),
            cancel_all_tif::SCHEDULED => Ok(CancelAllTimeInForce::Scheduled),
            cancel_all_tif::ABORT => Ok(CancelAllTimeInForce::Abort),
            other => Err(LighterError::invalid_parameter(format!(
                "Unknown cancel-all time in force: {}",
                other
            ))),
        }
    }
}

impl From<CancelAllTimeInForce> for i32 {
    fn from(tif: CancelAllTimeInForce) -> Self {
        match tif {
            CancelAllTimeInForce::Immediate => cancel_all_tif::IMMEDIATE,
            CancelAllTimeInForce::Scheduled => cancel_all_tif::SCHEDULED,
            CancelAllTimeInForce::Abort => cancel_all_tif::ABORT,
        }
    }
}

/// Parameters for signing a new order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    /// Market index
    pub market_index: i32,
    /// Client-chosen order index
    pub client_order_index: i64,
    /// Base amount in base units
    pub base_amount: i64,
    /// Price in price ticks
    pub price: i32,
    /// Sell side when true
    pub is_ask: bool,
    /// Order type
    pub order_type: OrderType,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Reduce-only flag
    #[serde(default)]
    pub reduce_only: bool,
    /// Trigger price, `NIL_TRIGGER_PRICE` when absent
    #[serde(default)]
    pub trigger_price: Option<i32>,
    /// Order expiry, `DEFAULT_IOC_EXPIRY` when absent
    #[serde(default)]
    pub order_expiry: Option<i64>,
    /// Transaction nonce
    pub nonce: i64,
}

impl CreateOrderParams {
    /// Create order parameters with no trigger, no expiry and reduce-only off
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        market_index: i32,
        client_order_index: i64,
        base_amount: i64,
        price: i32,
        is_ask: bool,
        order_type: OrderType,
        time_in_force: TimeInForce,
        nonce: i64,
    ) -> Self {
        Self {
            market_index,
            client_order_index,
            base_amount,
            price,
            is_ask,
            order_type,
            time_in_force,
            reduce_only: false,
            trigger_price: None,
            order_expiry: None,
            nonce,
        }
    }

    /// Mark the order reduce-only
    pub fn reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    /// Set the trigger price
    pub fn trigger_price(mut self, trigger_price: i32) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Set the order expiry
    pub fn order_expiry(mut self, order_expiry: i64) -> Self {
        self.order_expiry = Some(order_expiry);
        self
    }
}

/// Parameters for signing an order cancellation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderParams {
    /// Market index
    pub market_index: i32,
    /// Order index to cancel
    pub order_index: i64,
    /// Transaction nonce
    pub nonce: i64,
}

/// Parameters for signing an order modification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderParams {
    /// Market index
    pub market_index: i32,
    /// Order index to modify
    pub order_index: i64,
    /// New base amount
    pub base_amount: i64,
    /// New price
    pub price: i64,
    /// New trigger price
    pub trigger_price: i64,
    /// Transaction nonce
    pub nonce: i64,
}

/// Parameters for signing a cancel-all request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllOrdersParams {
    /// Cancel-all mode
    pub time_in_force: CancelAllTimeInForce,
    /// Scheduled time; ignored for immediate cancels
    pub time: i64,
    /// Transaction nonce
    pub nonce: i64,
}
