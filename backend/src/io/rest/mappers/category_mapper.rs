use crate::domain::models::category::Category as DomainCategory;
use shared::Category as SharedCategory;

pub struct CategoryMapper;

impl CategoryMapper {
    pub fn to_dto(domain: DomainCategory) -> SharedCategory {
        SharedCategory {
            id: domain.id,
            name: domain.name,
            category_type: domain.category_type,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainCategory>) -> Vec<SharedCategory> {
        domain.into_iter().map(Self::to_dto).collect()
    }
}
