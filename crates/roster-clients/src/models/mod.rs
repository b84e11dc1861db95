//! Wire models for the remote APIs

mod coc;
mod notion;

pub use coc::{ClanListModel, ClanMemberListModel, ClanMemberModel, ClanModel, ClanSearch};
pub use notion::{
    CreatePageRequest, DatabaseQueryModel, MultiSelectPropertyModel, NewPagePropertiesModel,
    NewRichTextModel, NewTextContent, NewTextItem, NewTitleModel, PageModel, PagePropertiesModel,
    ParentModel, RichTextModel, RichTextPropertyModel, SelectOptionModel, SelectPropertyModel,
    TextModel, TitlePropertyModel,
};
