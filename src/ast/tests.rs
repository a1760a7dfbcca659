use pretty_assertions::assert_eq;

use super::{
    ast::{AstArena, NodeId, NodeList, TokenId, TokenRange},
    types::{Identifier, Qualifier, QualifierKind},
};

fn identifier(arena: &mut AstArena, token: u32) -> NodeId<Identifier> {
    arena.alloc(Identifier {
        span: TokenRange::new(token as usize, token as usize + 1),
        name: TokenId(token),
        next: None,
    })
}

#[test]
fn test_alloc_and_get() {
    let mut arena = AstArena::default();
    let id = identifier(&mut arena, 4);

    assert_eq!(arena.get(id).name, TokenId(4));
    arena.get_mut(id).name = TokenId(5);
    assert_eq!(arena.get(id).name, TokenId(5));
}

#[test]
#[should_panic]
fn test_get_with_wrong_kind_panics() {
    let mut arena = AstArena::default();
    let id = identifier(&mut arena, 0);

    arena.get::<Qualifier>(id.cast());
}

#[test]
fn test_finish_list_moves_scratch() {
    let mut arena = AstArena::with_capacity(8, 8);
    let mark = arena.scratch_mark();
    let a = identifier(&mut arena, 0);
    let b = identifier(&mut arena, 1);
    arena.push_scratch(a);
    arena.push_scratch(b);

    let list: NodeList<NodeId<Identifier>> = arena.finish_list(mark);

    assert_eq!(arena.scratch_len(), 0);
    assert_eq!(list.len(), 2);
    assert_eq!(arena.list(list).collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_nested_lists_do_not_interleave() {
    let mut arena = AstArena::default();
    let outer = arena.scratch_mark();
    arena.push_scratch(TokenId(1));

    let inner = arena.scratch_mark();
    arena.push_scratch(TokenId(7));
    arena.push_scratch(TokenId(8));
    let inner_list: NodeList<TokenId> = arena.finish_list(inner);

    arena.push_scratch(TokenId(2));
    let outer_list: NodeList<TokenId> = arena.finish_list(outer);

    assert_eq!(arena.list(inner_list).collect::<Vec<_>>(), vec![TokenId(7), TokenId(8)]);
    assert_eq!(arena.list(outer_list).collect::<Vec<_>>(), vec![TokenId(1), TokenId(2)]);
}

#[test]
fn test_rollback_restores_checkpoint() {
    let mut arena = AstArena::default();
    identifier(&mut arena, 0);
    let checkpoint = arena.checkpoint();

    let mark = arena.scratch_mark();
    let q = arena.alloc(Qualifier {
        span: TokenRange::new(1, 2),
        kind: QualifierKind::Const,
    });
    arena.push_scratch(q);
    let _: NodeList<NodeId<Qualifier>> = arena.finish_list(mark);

    arena.rollback(checkpoint);

    assert_eq!(arena.checkpoint(), checkpoint);
    assert_eq!(arena.node_count(), 1);
}

#[test]
fn test_empty_list() {
    let arena = AstArena::default();
    let list: NodeList<TokenId> = NodeList::EMPTY;

    assert!(list.is_empty());
    assert_eq!(arena.list(list).count(), 0);
}
