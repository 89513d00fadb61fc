use crate::domain::models::transaction::Transaction as DomainTransaction;
use crate::domain::money::format_currency;
use crate::domain::EditView;
use crate::io::rest::mappers::CategoryMapper;
use shared::{EditTransactionView, Transaction as SharedTransaction};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            category_id: domain.category_id,
            category_name: domain.category_name,
            formatted_amount: format_currency(domain.amount),
            amount: domain.amount,
            transaction_type: domain.transaction_type,
            description: domain.description,
            created_at: domain.created_at,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainTransaction>) -> Vec<SharedTransaction> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_edit_view(view: EditView) -> EditTransactionView {
        EditTransactionView {
            transaction: Self::to_dto(view.transaction),
            categories: CategoryMapper::to_dto_list(view.categories),
            date: view.date,
        }
    }
}
