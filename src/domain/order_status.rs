use serde::{Deserialize, Serialize};

// Canonical status set. The legacy data mixed casings ("pending", "Pending",
// "Complete", "Incomplete"); parsing is case insensitive and everything is
// stored lowercase from here on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus{
    Pending,
    Incomplete,
    Complete
}

impl OrderStatus{
    pub fn parse(status: &str) -> Result<OrderStatus, String>{
        match status.to_lowercase().as_str(){
            "pending" => Ok(OrderStatus::Pending),
            "incomplete" => Ok(OrderStatus::Incomplete),
            "complete" => Ok(OrderStatus::Complete),
            _ => Err(format!("{} is not a valid order status, must be pending, incomplete or complete", status))
        }
    }

    pub fn as_str(&self) -> &'static str{
        match self{
            OrderStatus::Pending => "pending",
            OrderStatus::Incomplete => "incomplete",
            OrderStatus::Complete => "complete"
        }
    }
}
