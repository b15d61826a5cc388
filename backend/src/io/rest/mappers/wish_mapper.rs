use shared::{AddWishRequest, Wish, WishState};

use crate::domain::commands::wish::{AddWishCommand, ApproveWishCommand};
use crate::domain::models::wish::{Wish as DomainWish, WishState as DomainWishState};

pub struct WishMapper;

impl WishMapper {
    pub fn state_to_dto(domain_state: DomainWishState) -> WishState {
        match domain_state {
            DomainWishState::Pending => WishState::Pending,
            DomainWishState::Approved => WishState::Approved,
            DomainWishState::Purchased => WishState::Purchased,
        }
    }

    pub fn to_dto(domain: &DomainWish) -> Wish {
        Wish {
            id: domain.id().to_string(),
            description: domain.description().to_string(),
            required_level: domain.required_level(),
            approved: domain.is_approved(),
            purchased: domain.is_purchased(),
            child_username: domain.child_username().to_string(),
            state: Self::state_to_dto(domain.state()),
        }
    }

    pub fn to_dto_list<'a, I>(domain_wishes: I) -> Vec<Wish>
    where
        I: IntoIterator<Item = &'a DomainWish>,
    {
        domain_wishes.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_add_command(request: AddWishRequest) -> AddWishCommand {
        AddWishCommand {
            description: request.description,
            required_level: request.required_level,
        }
    }

    pub fn to_approve_command(wish_id: String) -> ApproveWishCommand {
        ApproveWishCommand { wish_id }
    }
}
