use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role{
    Customer,
    Driver,
    Manager
}

impl Role{
    pub fn parse(role: &str) -> Result<Role, String>{
        match role.to_lowercase().as_str(){
            "customer" => Ok(Role::Customer),
            "driver" => Ok(Role::Driver),
            "manager" => Ok(Role::Manager),
            _ => Err(format!("{} is not a valid role, must be customer, driver or manager", role))
        }
    }

    pub fn as_str(&self) -> &'static str{
        match self{
            Role::Customer => "customer",
            Role::Driver => "driver",
            Role::Manager => "manager"
        }
    }

    // Drivers and managers see all orders system wide
    pub fn sees_all_orders(&self) -> bool{
        matches!(self, Role::Driver | Role::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
