use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType{
    Drinks,
    Entree,
    Sides
}

impl ItemType{
    pub fn parse(type_of_item: &str) -> Result<ItemType, String>{
        match type_of_item.to_lowercase().as_str(){
            "drinks" => Ok(ItemType::Drinks),
            "entree" => Ok(ItemType::Entree),
            "sides" => Ok(ItemType::Sides),
            _ => Err(format!("{} is not a valid item type, must be drinks, entree or sides", type_of_item))
        }
    }

    pub fn as_str(&self) -> &'static str{
        match self{
            ItemType::Drinks => "drinks",
            ItemType::Entree => "entree",
            ItemType::Sides => "sides"
        }
    }
}
