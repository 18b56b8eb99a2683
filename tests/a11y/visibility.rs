//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use voxdom::a11y::{Query, VisibilityCheck};
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    #[test]
    fn plain_paragraph() {
        let dom = parse("<p id=p>Hello</p>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(query.is_visible(&element(&dom, "p"), VisibilityCheck::default()));
    }

    #[test]
    fn visibility_reenabled_by_descendant() {
        let dom = parse(
            "<div id=d style='visibility:hidden'><span id=s style='visibility:visible'>x</span></div>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(query.is_visible(&element(&dom, "s"), VisibilityCheck::default()));
        assert!(query.is_visible(&element(&dom, "d"), VisibilityCheck::default()));
    }

    #[test]
    fn forced_visible_by_aria() {
        let dom = parse(
            "<div style='opacity:0'><span id=s aria-hidden=false>x</span></div>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(query.is_visible(&element(&dom, "s"), VisibilityCheck::default()));
    }

    #[test]
    fn ancestors_ignored_when_not_checked() {
        let dom = parse("<div style='opacity:0'><span id=s>x</span></div>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(query.is_visible(&element(&dom, "s"), VisibilityCheck::without_ancestors()));
    }

    #[test]
    fn iframe_with_source() {
        let dom = parse("<iframe id=f src='https://example.com/'></iframe>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(query.is_visible(&element(&dom, "f"), VisibilityCheck::default()));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use std::rc::Rc;

    use voxdom::a11y::{Query, VisibilityCheck};
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    #[test]
    fn display_none_ancestor() {
        let dom = parse("<div style='display:none'><p id=p>x</p></div>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(!query.is_visible(&element(&dom, "p"), VisibilityCheck::default()));
    }

    #[test]
    fn opacity_zero() {
        let dom = parse("<div id=d style='opacity: 0'>x</div>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(!query.is_visible(&element(&dom, "d"), VisibilityCheck::default()));
    }

    #[test]
    fn hidden_without_descendant_check() {
        let dom = parse(
            "<div id=d style='visibility:hidden'><span style='visibility:visible'>x</span></div>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        let check = VisibilityCheck {
            check_ancestors: true,
            check_descendants: false,
        };

        assert!(!query.is_visible(&element(&dom, "d"), check));
    }

    #[test]
    fn iframe_without_source() {
        let dom = parse("<iframe id=f></iframe>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(!query.is_visible(&element(&dom, "f"), VisibilityCheck::default()));
    }

    #[test]
    fn detached_subtree() {
        let dom = parse("<div id=d><p id=p>x</p></div>");
        let options = VoxOptions::default();
        let div = element(&dom, "d");
        let p = element(&dom, "p");

        assert!(Query::new(&dom.document, &options).is_visible(&p, VisibilityCheck::default()));

        let body = div.parent.take().and_then(|parent| parent.upgrade()).unwrap();
        body.children.borrow_mut().retain(|child| !Rc::ptr_eq(child, &div));
        let query = Query::new(&dom.document, &options);

        assert!(!query.is_visible(&p, VisibilityCheck::default()));
    }

    #[test]
    fn hidden_attribute() {
        let dom = parse("<p id=p hidden>x</p>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(!query.is_visible(&element(&dom, "p"), VisibilityCheck::default()));
    }
}
