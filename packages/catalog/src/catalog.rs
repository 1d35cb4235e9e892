//! Built-in insertion directives, one table per document kind
//!
//! Field lists follow the modding wiki pages for item, block and entity
//! JSON properties, and the grid/cooking recipe references.

use crate::kind::DocumentKind;
use workbench_patch::{InsertDirective, InsertMode};

/// category, display name, pointer, mode, template, description
struct Entry(
    &'static str,
    &'static str,
    &'static str,
    InsertMode,
    &'static str,
    &'static str,
);

impl Entry {
    fn to_directive(&self) -> InsertDirective {
        let Entry(category, name, pointer, mode, template, description) = *self;
        InsertDirective::new(category, name, pointer, mode, template, description)
    }
}

/// The catalog for one document kind, in display order
pub fn options(kind: DocumentKind) -> Vec<InsertDirective> {
    table(kind).iter().map(Entry::to_directive).collect()
}

/// Distinct categories of a kind, sorted
pub fn categories(kind: DocumentKind) -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = table(kind).iter().map(|e| e.0).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

/// Look up an entry by display name (case-insensitive)
pub fn find_option(kind: DocumentKind, display_name: &str) -> Option<InsertDirective> {
    table(kind)
        .iter()
        .find(|e| e.1.eq_ignore_ascii_case(display_name.trim()))
        .map(Entry::to_directive)
}

fn table(kind: DocumentKind) -> &'static [Entry] {
    match kind {
        DocumentKind::Item => ITEM,
        DocumentKind::Block => BLOCK,
        DocumentKind::Entity => ENTITY,
        DocumentKind::Recipe => RECIPE,
    }
}

const ITEM: &[Entry] = &[
    Entry(
        "Core",
        "code",
        "/code",
        InsertMode::Overwrite,
        r#""myitem""#,
        "Unique identifier for the item.",
    ),
    Entry(
        "Core",
        "enabled",
        "/enabled",
        InsertMode::SetIfMissing,
        "true",
        "Whether the item is loaded.",
    ),
    Entry(
        "Core",
        "variantgroups",
        "/variantgroups",
        InsertMode::SetIfMissing,
        r#"[{ "code": "type", "states": ["a", "b"] }]"#,
        "Define variants for the item.",
    ),
    Entry(
        "Core",
        "allowedVariants",
        "/allowedVariants",
        InsertMode::SetIfMissing,
        "[]",
        "Trim generated variants (advanced).",
    ),
    Entry(
        "Core",
        "skipVariants",
        "/skipVariants",
        InsertMode::SetIfMissing,
        "[]",
        "Skip specific variants (advanced).",
    ),
    Entry(
        "Specific",
        "class",
        "/class",
        InsertMode::SetIfMissing,
        r#""item""#,
        "C# class to use for extra functionality.",
    ),
    Entry(
        "Specific",
        "durability",
        "/durability",
        InsertMode::SetIfMissing,
        "0",
        "Max uses.",
    ),
    Entry(
        "Specific",
        "maxstacksize",
        "/maxstacksize",
        InsertMode::SetIfMissing,
        "64",
        "Max stack size.",
    ),
    Entry(
        "Specific",
        "attackpower",
        "/attackpower",
        InsertMode::SetIfMissing,
        "0.5",
        "Melee damage.",
    ),
    Entry(
        "Specific",
        "attackrange",
        "/attackrange",
        InsertMode::SetIfMissing,
        "1.5",
        "Melee range.",
    ),
    Entry(
        "Specific",
        "materialdensity",
        "/materialdensity",
        InsertMode::SetIfMissing,
        "9999",
        "Float/sink behavior.",
    ),
    Entry(
        "Specific",
        "liquidselectable",
        "/liquidselectable",
        InsertMode::SetIfMissing,
        "false",
        "Used by buckets etc.",
    ),
    Entry(
        "Food",
        "nutritionProps",
        "/nutritionProps",
        InsertMode::SetIfMissing,
        r#"{ "foodcategory": "vegetable", "saturation": 0, "health": 0 }"#,
        "Basic nutrition values.",
    ),
    Entry(
        "Food",
        "transitionableProps (Perish/Cure)",
        "/transitionableProps",
        InsertMode::SetIfMissing,
        r#"[{ "type": "Perish", "freshHours": { "avg": 240 }, "transitionHours": { "avg": 48 }, "transitionedStack": { "type": "item", "code": "game:rot", "quantity": 1 }, "transitionRatio": 1 }]"#,
        "Spoil/cure transitions.",
    ),
    Entry(
        "Container/Placement",
        "shelvable",
        "/shelvable",
        InsertMode::SetIfMissing,
        "true",
        "Allow placing on shelves.",
    ),
    Entry(
        "Container/Placement",
        "rackable",
        "/rackable",
        InsertMode::SetIfMissing,
        "true",
        "Allow placing on tool racks (use toolrackTransform too).",
    ),
    Entry(
        "Container/Placement",
        "inFirePitProps",
        "/inFirePitProps",
        InsertMode::SetIfMissing,
        r#"{ "transform": { "scale": 0.85, "origin": { "x": 0.5, "y": 0.0625, "z": 0.5 }, "translation": { "x": 0, "y": 0, "z": 0 }, "rotation": { "x": 0, "y": 0, "z": 90 } }, "useFirepitModel": "Spit" }"#,
        "Extra rendering/placement behavior in firepits.",
    ),
    Entry(
        "Container/Placement",
        "waterTightContainerProps",
        "/waterTightContainerProps",
        InsertMode::SetIfMissing,
        r#"{ "containable": true, "itemsPerLitre": 1, "texture": "block/water", "allowSpill": true }"#,
        "Liquid-container behavior (barrels/buckets).",
    ),
    Entry(
        "Rendering",
        "texture",
        "/texture",
        InsertMode::SetIfMissing,
        r#""item/myitem""#,
        "Item texture path.",
    ),
    Entry(
        "Rendering",
        "textures",
        "/textures",
        InsertMode::SetIfMissing,
        r#"{ "metal": { "base": "block/metal/ingot/{metal}" } }"#,
        "Texture map for shaped items.",
    ),
    Entry(
        "Rendering",
        "shape",
        "/shape",
        InsertMode::SetIfMissing,
        r#"{ "base": "item/myshape" }"#,
        "Shape definition.",
    ),
    Entry(
        "Rendering",
        "shapeinventory",
        "/shapeinventory",
        InsertMode::SetIfMissing,
        r#"{ "base": "item/myshape-inv" }"#,
        "Different inventory shape.",
    ),
    Entry(
        "Rendering",
        "guiTransform",
        "/guiTransform",
        InsertMode::SetIfMissing,
        r#"{ "origin": { "x": 0.5, "y": 0.5, "z": 0.5 }, "translation": { "x": 0, "y": 0, "z": 0 }, "rotation": { "x": 0, "y": 0, "z": 0 }, "scale": 1 }"#,
        "GUI render transform.",
    ),
    Entry(
        "Rendering",
        "fphandtransform",
        "/fphandtransform",
        InsertMode::SetIfMissing,
        r#"{ "origin": { "x": 0.5, "y": 0.5, "z": 0.5 }, "translation": { "x": 0, "y": 0, "z": 0 }, "rotation": { "x": 0, "y": 0, "z": 0 }, "scale": 1 }"#,
        "First-person hand transform.",
    ),
    Entry(
        "Rendering",
        "tphandtransform",
        "/tphandtransform",
        InsertMode::SetIfMissing,
        r#"{ "origin": { "x": 0.5, "y": 0.5, "z": 0.5 }, "translation": { "x": 0, "y": 0, "z": 0 }, "rotation": { "x": 0, "y": 0, "z": 0 }, "scale": 1 }"#,
        "Third-person hand transform.",
    ),
    Entry(
        "Rendering",
        "groundtransform",
        "/groundtransform",
        InsertMode::SetIfMissing,
        r#"{ "origin": { "x": 0.5, "y": 0.5, "z": 0.5 }, "translation": { "x": 0, "y": 0, "z": 0 }, "rotation": { "x": 0, "y": 0, "z": 0 }, "scale": 1 }"#,
        "Dropped-on-ground transform.",
    ),
    Entry(
        "Rendering",
        "toolrackTransform",
        "/toolrackTransform",
        InsertMode::SetIfMissing,
        r#""default""#,
        "Transform preset for tool racks.",
    ),
    Entry(
        "Rendering",
        "glowLevel",
        "/glowLevel",
        InsertMode::SetIfMissing,
        "0",
        "Light emitted.",
    ),
    Entry(
        "Rendering",
        "heldTpUseAnimation",
        "/heldTpUseAnimation",
        InsertMode::SetIfMissing,
        r#""hoe""#,
        "Third-person use animation.",
    ),
    Entry(
        "Rendering",
        "heldTpHitAnimation",
        "/heldTpHitAnimation",
        InsertMode::SetIfMissing,
        r#""swordhit""#,
        "Third-person hit animation.",
    ),
    Entry(
        "Rendering",
        "heldTpIdleAnimation",
        "/heldTpIdleAnimation",
        InsertMode::SetIfMissing,
        r#""holdbothhandslarge""#,
        "Third-person idle animation.",
    ),
];

const BLOCK: &[Entry] = &[
    Entry(
        "Core",
        "code",
        "/code",
        InsertMode::Overwrite,
        r#""myblock""#,
        "Unique identifier for the block.",
    ),
    Entry(
        "Core",
        "enabled",
        "/enabled",
        InsertMode::SetIfMissing,
        "true",
        "Whether the block is loaded.",
    ),
    Entry(
        "Core",
        "variantgroups",
        "/variantgroups",
        InsertMode::SetIfMissing,
        r#"[{ "code": "type", "states": ["a", "b"] }]"#,
        "Define block variants.",
    ),
    Entry(
        "Core",
        "allowedVariants",
        "/allowedVariants",
        InsertMode::SetIfMissing,
        "[]",
        "Trim generated variants.",
    ),
    Entry(
        "Core",
        "skipVariants",
        "/skipVariants",
        InsertMode::SetIfMissing,
        "[]",
        "Skip specific variants.",
    ),
    Entry(
        "Specific",
        "class",
        "/class",
        InsertMode::SetIfMissing,
        r#""Block""#,
        "C# block class for special behavior.",
    ),
    Entry(
        "Specific",
        "entityclass",
        "/entityclass",
        InsertMode::SetIfMissing,
        r#""BlockEntityGeneric""#,
        "Block entity class.",
    ),
    Entry(
        "Specific",
        "behaviors (append)",
        "/behaviors",
        InsertMode::AppendToArray,
        r#"{ "name": "Falling" }"#,
        "Append a BlockBehavior entry.",
    ),
    Entry(
        "Specific",
        "entityBehaviors (append)",
        "/entityBehaviors",
        InsertMode::AppendToArray,
        r#"{ "name": "MechanicalPower" }"#,
        "Append a BlockEntityBehavior entry.",
    ),
    Entry(
        "Physics/Mining",
        "blockmaterial",
        "/blockmaterial",
        InsertMode::SetIfMissing,
        r#""Stone""#,
        "Mining material category.",
    ),
    Entry(
        "Physics/Mining",
        "matterstate",
        "/matterstate",
        InsertMode::SetIfMissing,
        r#""solid""#,
        "solid/liquid/etc (used for special cases).",
    ),
    Entry(
        "Physics/Mining",
        "resistance",
        "/resistance",
        InsertMode::SetIfMissing,
        "6",
        "Break time baseline.",
    ),
    Entry(
        "Physics/Mining",
        "requiredminingtier",
        "/requiredminingtier",
        InsertMode::SetIfMissing,
        "0",
        "Minimum tier to get drops.",
    ),
    Entry(
        "Interaction",
        "climbable",
        "/climbable",
        InsertMode::SetIfMissing,
        "false",
        "Walk into it to climb (ladder).",
    ),
    Entry(
        "Interaction",
        "rainpermeable",
        "/rainpermeable",
        InsertMode::SetIfMissing,
        "false",
        "Whether rain falls through.",
    ),
    Entry(
        "Rendering",
        "textures",
        "/textures",
        InsertMode::SetIfMissing,
        r#"{ "all": { "base": "block/myblock" } }"#,
        "World textures map.",
    ),
    Entry(
        "Rendering",
        "texturesinventory",
        "/texturesinventory",
        InsertMode::SetIfMissing,
        r#"{ "all": { "base": "block/myblock" } }"#,
        "Inventory textures override.",
    ),
    Entry(
        "Rendering",
        "shape",
        "/shape",
        InsertMode::SetIfMissing,
        r#"{ "base": "block/myshape" }"#,
        "World shape.",
    ),
    Entry(
        "Rendering",
        "shapeinventory",
        "/shapeinventory",
        InsertMode::SetIfMissing,
        r#"{ "base": "block/myshape-inv" }"#,
        "Inventory shape.",
    ),
    Entry(
        "Liquids",
        "waterTightContainerProps",
        "/waterTightContainerProps",
        InsertMode::SetIfMissing,
        r#"{ "containable": true, "itemsPerLitre": 1, "texture": "block/water" }"#,
        "Liquid container props (rare for blocks).",
    ),
];

const ENTITY: &[Entry] = &[
    Entry(
        "Core",
        "code",
        "/code",
        InsertMode::Overwrite,
        r#""myentity""#,
        "Unique identifier for the entity.",
    ),
    Entry(
        "Core",
        "enabled",
        "/enabled",
        InsertMode::SetIfMissing,
        "true",
        "Whether the entity is loaded.",
    ),
    Entry(
        "Core",
        "variantgroups",
        "/variantgroups",
        InsertMode::SetIfMissing,
        r#"[{ "code": "type", "states": ["a", "b"] }]"#,
        "Define entity variants.",
    ),
    Entry(
        "Common",
        "class",
        "/class",
        InsertMode::SetIfMissing,
        r#""entity""#,
        "C# entity class.",
    ),
    Entry(
        "Common",
        "habitat",
        "/habitat",
        InsertMode::SetIfMissing,
        r#""land""#,
        "land/sea/air.",
    ),
    Entry(
        "Common",
        "hitboxsize",
        "/hitboxsize",
        InsertMode::SetIfMissing,
        r#"{ "x": 0.125, "y": 0.125 }"#,
        "Size of hitbox.",
    ),
    Entry(
        "Common",
        "eyeheight",
        "/eyeheight",
        InsertMode::SetIfMissing,
        "0.1",
        "Eye height from bottom.",
    ),
    Entry(
        "Movement",
        "canclimb",
        "/canclimb",
        InsertMode::SetIfMissing,
        "false",
        "Can climb ladders.",
    ),
    Entry(
        "Movement",
        "canclimbanywhere",
        "/canclimbanywhere",
        InsertMode::SetIfMissing,
        "false",
        "Can climb any block.",
    ),
    Entry(
        "Movement",
        "falldamage",
        "/falldamage",
        InsertMode::SetIfMissing,
        "true",
        "Takes fall damage.",
    ),
    Entry(
        "Movement",
        "climbtouchdistance",
        "/climbtouchdistance",
        InsertMode::SetIfMissing,
        "0.5",
        "Climb touch distance.",
    ),
    Entry(
        "Movement",
        "rotatemodelonclimb",
        "/rotatemodelonclimb",
        InsertMode::SetIfMissing,
        "false",
        "Rotate model while climbing.",
    ),
    Entry(
        "Combat",
        "knockbackresistance",
        "/knockbackresistance",
        InsertMode::SetIfMissing,
        "0.0",
        "Higher = less knockback.",
    ),
    Entry(
        "Data",
        "attributes",
        "/attributes",
        InsertMode::SetIfMissing,
        r#"{ "attackPower": 10 }"#,
        "Custom attributes (final).",
    ),
    Entry(
        "Audio",
        "sounds",
        "/sounds",
        InsertMode::SetIfMissing,
        r#"{ "idle": "game:sounds/creature/idle" }"#,
        "Entity sounds mapping.",
    ),
    Entry(
        "Audio",
        "idlesoundchance",
        "/idlesoundchance",
        InsertMode::SetIfMissing,
        "0.3",
        "Idle sound chance.",
    ),
    Entry(
        "Audio",
        "idlesoundrange",
        "/idlesoundrange",
        InsertMode::SetIfMissing,
        "24",
        "Idle sound range.",
    ),
    Entry(
        "Drops",
        "drops (empty)",
        "/drops",
        InsertMode::SetIfMissing,
        "[]",
        "No drops.",
    ),
    Entry(
        "Drops",
        "drops (append example)",
        "/drops",
        InsertMode::AppendToArray,
        r#"{ "type": "item", "code": "game:stick", "quantity": { "avg": 0.2, "var": 0 } }"#,
        "Append a drop entry.",
    ),
    Entry(
        "Client",
        "client",
        "/client",
        InsertMode::SetIfMissing,
        "{ }",
        "Client-only section.",
    ),
    Entry(
        "Client",
        "client.renderer",
        "/client/renderer",
        InsertMode::SetIfMissing,
        r#""Shape""#,
        "Renderer system name.",
    ),
    Entry(
        "Client",
        "client.texture",
        "/client/texture",
        InsertMode::SetIfMissing,
        r#"{ "base": "entity/myentity" }"#,
        "Override base texture.",
    ),
    Entry(
        "Animation",
        "animations (empty)",
        "/animations",
        InsertMode::SetIfMissing,
        "[]",
        "Animation list.",
    ),
    Entry(
        "Animation",
        "animations (append example)",
        "/animations",
        InsertMode::AppendToArray,
        r#"{ "code": "walk", "animation": "walk", "weight": 1.0, "animationspeed": 1.0, "mulwithwalkspeed": true }"#,
        "Append an animation entry.",
    ),
    Entry(
        "Server",
        "server",
        "/server",
        InsertMode::SetIfMissing,
        "{ }",
        "Server-only section.",
    ),
    Entry(
        "Server",
        "server.attributes",
        "/server/attributes",
        InsertMode::SetIfMissing,
        "{ }",
        "Server-only attributes.",
    ),
];

const RECIPE: &[Entry] = &[
    Entry(
        "Templates",
        "GridRecipe template",
        "/",
        InsertMode::ReplaceRoot,
        r#"{
  "ingredientPattern": "GS,S_",
  "ingredients": {
    "G": { "type": "item", "code": "drygrass" },
    "S": { "type": "item", "code": "stick" }
  },
  "width": 2,
  "height": 2,
  "output": { "type": "item", "code": "firestarter" }
}"#,
        "Replace JSON with a GridRecipe skeleton.",
    ),
    Entry(
        "Templates",
        "CookingRecipe template",
        "/",
        InsertMode::ReplaceRoot,
        r#"{
  "code": "mymeal",
  "perishableProps": {
    "freshHours": { "avg": 1080 },
    "transitionHours": { "avg": 180 },
    "transitionRatio": 1,
    "transitionedStack": { "type": "item", "code": "rot" }
  },
  "shape": { "base": "block/food/meal/mymeal" },
  "ingredients": [
    { "code": "fruit", "validStacks": [ { "type": "item", "code": "fruit-*", "shapeElement": "bowl/fruit" } ], "minQuantity": 2, "maxQuantity": 2 }
  ]
}"#,
        "Replace JSON with a CookingRecipe skeleton.",
    ),
    Entry(
        "GridRecipe",
        "ingredientPattern",
        "/ingredientPattern",
        InsertMode::SetIfMissing,
        r#""GS,S_""#,
        "Pattern (commas for rows, _ for empty).",
    ),
    Entry(
        "GridRecipe",
        "ingredients",
        "/ingredients",
        InsertMode::SetIfMissing,
        r#"{ "A": { "type": "item", "code": "game:stick" } }"#,
        "Dictionary used by pattern symbols.",
    ),
    Entry(
        "GridRecipe",
        "output",
        "/output",
        InsertMode::SetIfMissing,
        r#"{ "type": "item", "code": "game:stick", "quantity": 1 }"#,
        "Resulting stack.",
    ),
    Entry(
        "GridRecipe",
        "width",
        "/width",
        InsertMode::SetIfMissing,
        "3",
        "Required grid width.",
    ),
    Entry(
        "GridRecipe",
        "height",
        "/height",
        InsertMode::SetIfMissing,
        "3",
        "Required grid height.",
    ),
    Entry(
        "GridRecipe",
        "shapeless",
        "/shapeless",
        InsertMode::SetIfMissing,
        "false",
        "Ignore order.",
    ),
    Entry(
        "GridRecipe",
        "enabled",
        "/enabled",
        InsertMode::SetIfMissing,
        "true",
        "Load recipe?",
    ),
    Entry(
        "GridRecipe",
        "name",
        "/name",
        InsertMode::SetIfMissing,
        r#""myrecipe""#,
        "Recipe name for logging/handbook.",
    ),
    Entry(
        "GridRecipe",
        "attributes",
        "/attributes",
        InsertMode::SetIfMissing,
        "{ }",
        "Optional attributes blob.",
    ),
    Entry(
        "GridRecipe",
        "allowedVariants",
        "/allowedVariants",
        InsertMode::SetIfMissing,
        "{ }",
        "Allowed variants map for {code}.",
    ),
    Entry(
        "GridRecipe",
        "skipVariants",
        "/skipVariants",
        InsertMode::SetIfMissing,
        "{ }",
        "Skip variants map for {code}.",
    ),
    Entry(
        "CookingRecipe",
        "code",
        "/code",
        InsertMode::SetIfMissing,
        r#""mymeal""#,
        "Unique meal/recipe code.",
    ),
    Entry(
        "CookingRecipe",
        "ingredients (append)",
        "/ingredients",
        InsertMode::AppendToArray,
        r#"{ "code": "fruit", "validStacks": [ { "type": "item", "code": "fruit-*", "shapeElement": "bowl/fruit" } ], "minQuantity": 1, "maxQuantity": 2 }"#,
        "Append a CookingRecipeIngredient.",
    ),
    Entry(
        "CookingRecipe",
        "perishableProps",
        "/perishableProps",
        InsertMode::SetIfMissing,
        r#"{ "freshHours": { "avg": 1080 }, "transitionHours": { "avg": 180 }, "transitionRatio": 1, "transitionedStack": { "type": "item", "code": "rot" } }"#,
        "Required transitionable properties (expiry).",
    ),
    Entry(
        "CookingRecipe",
        "shape",
        "/shape",
        InsertMode::SetIfMissing,
        r#"{ "base": "block/food/meal/mymeal" }"#,
        "Required cooking pot shape.",
    ),
    Entry(
        "CookingRecipe",
        "enabled",
        "/enabled",
        InsertMode::SetIfMissing,
        "true",
        "Load recipe?",
    ),
    Entry(
        "CookingRecipe",
        "cooksInto",
        "/cooksInto",
        InsertMode::SetIfMissing,
        r#"{ "type": "item", "code": "game:rot", "quantity": 1 }"#,
        "Convert ingredients into a specific stack.",
    ),
    Entry(
        "CookingRecipe",
        "isFood",
        "/isFood",
        InsertMode::SetIfMissing,
        "false",
        "If true and cooksInto set, won’t dirty the pot.",
    ),
];
