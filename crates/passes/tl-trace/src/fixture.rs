//! Small registry shared by unit tests

use tl_meta::{ObjectTypeDecl, Registry, RegistryBuilder, TagDecl};

pub(crate) fn registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .object_type(ObjectTypeDecl::new("ObjectTag", "none"))
        .object_type(ObjectTypeDecl::new("ElementTag", "el").with_base("ObjectTag"))
        .object_type(ObjectTypeDecl::new("ListTag", "li").with_base("ObjectTag"))
        .object_type(ObjectTypeDecl::new("FlaggableObject", "none"))
        .object_type(
            ObjectTypeDecl::new("EntityTag", "e")
                .with_base("ObjectTag")
                .implementing("FlaggableObject"),
        )
        .object_type(ObjectTypeDecl::new("PlayerTag", "p").with_base("EntityTag"))
        .object_type(
            ObjectTypeDecl::new("LocationTag", "l")
                .with_base("ObjectTag")
                .implementing("FlaggableObject"),
        )
        .object_type(ObjectTypeDecl::new("MaterialTag", "m").with_base("ObjectTag"))
        .object_type(ObjectTypeDecl::new("NoneType", "none"));

    builder
        .tag(TagDecl::new("<player>", "PlayerTag"))
        .tag(TagDecl::new("<old_player>", "PlayerTag").deprecated("Use 'player'."))
        .tag(TagDecl::new("<entity[<entity>]>", "EntityTag"))
        .tag(TagDecl::new("<location[<location>]>", "LocationTag"))
        .tag(TagDecl::new("<definition[<name>]>", "ObjectTag"))
        .tag(TagDecl::new("<broken>", "MissingTag"))
        .tag(TagDecl::new("<player.location.block.material>", "MaterialTag"))
        .tag(TagDecl::new("<util.random.uuid>", "ElementTag"))
        .tag(TagDecl::new("<server.flag[<name>]>", "ObjectTag"))
        .tag(
            TagDecl::new("<server.list_online_players>", "ListTag")
                .deprecated("Use 'server.online_players'."),
        )
        .tag(TagDecl::new("<ObjectTag.type>", "ElementTag"))
        .tag(TagDecl::new("<ElementTag.to_uppercase>", "ElementTag"))
        .tag(TagDecl::new("<ElementTag.split[(<text>)]>", "ListTag"))
        .tag(TagDecl::new("<ListTag.size>", "ElementTag(Number)"))
        .tag(TagDecl::new("<ListTag.get[<#>]>", "ObjectTag"))
        .tag(TagDecl::new("<FlaggableObject.has_flag[<flag_name>]>", "ElementTag(Boolean)"))
        .tag(TagDecl::new("<EntityTag.location>", "LocationTag"))
        .tag(TagDecl::new("<EntityTag.display>", "ListTag"))
        .tag(TagDecl::new("<PlayerTag.name>", "ElementTag"))
        .tag(TagDecl::new("<PlayerTag.display>", "ElementTag"))
        .tag(
            TagDecl::new("<PlayerTag.money>", "ElementTag(Decimal)")
                .deprecated("Use 'PlayerTag.balance'."),
        )
        .tag(TagDecl::new("<PlayerTag.broken_member>", "MissingTag"))
        .tag(TagDecl::new("<LocationTag.find>", "LocationTag"))
        .tag(TagDecl::new("<LocationTag.find.entities>", "ListTag"))
        .tag(TagDecl::new("<LocationTag.find.entities.within[(<#.#>)]>", "ListTag"))
        .tag(TagDecl::new("<LocationTag.block>", "LocationTag"))
        .tag(TagDecl::new("<LocationTag.material>", "MaterialTag"))
        .tag(TagDecl::new("<MaterialTag.name>", "ElementTag"));

    builder.build().unwrap()
}
