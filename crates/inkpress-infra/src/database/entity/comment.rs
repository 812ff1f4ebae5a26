//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use inkpress_core::domain::CommentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub blog_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub is_approved: bool,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog::Entity",
        from = "Column::BlogId",
        to = "super::blog::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blog,
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Comment.
impl From<Model> for inkpress_core::domain::Comment {
    fn from(model: Model) -> Self {
        // Rows approved without a timestamp fall back to their creation time.
        let status = if model.is_approved {
            CommentStatus::Approved {
                at: model.approved_at.unwrap_or(model.created_at).into(),
            }
        } else {
            CommentStatus::Pending
        };

        Self {
            id: model.id,
            blog_id: model.blog_id,
            name: model.name,
            content: model.content,
            status,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Comment to SeaORM ActiveModel.
impl From<inkpress_core::domain::Comment> for ActiveModel {
    fn from(comment: inkpress_core::domain::Comment) -> Self {
        let is_approved = comment.is_approved();
        let approved_at = comment.approved_at().map(Into::into);

        Self {
            id: Set(comment.id),
            blog_id: Set(comment.blog_id),
            name: Set(comment.name),
            content: Set(comment.content),
            is_approved: Set(is_approved),
            approved_at: Set(approved_at),
            created_at: Set(comment.created_at.into()),
        }
    }
}
