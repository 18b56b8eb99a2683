//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use voxdom::a11y::{is_control, is_focusable, Query};
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    #[test]
    fn leaves() {
        let dom = parse(
            "<a id=a href=x>Link <b>text</b></a>\
             <h2 id=h>Title</h2>\
             <button id=b>Go</button>\
             <video id=v><track></video>\
             <div id=e></div>\
             <math id=m><mi>x</mi></math>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        for id in ["a", "h", "b", "v", "e", "m"] {
            assert!(query.is_leaf_node(&element(&dom, id), false), "{id}");
        }
    }

    #[test]
    fn hidden_nodes_are_leaves() {
        let dom = parse("<div id=d style='display:none'><p>x</p></div>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        let div = element(&dom, "d");

        assert!(query.is_leaf_node(&div, false));
        assert!(!query.is_leaf_node(&div, true));
    }

    #[test]
    fn controls() {
        let dom = parse(
            "<input id=t><select id=s></select><div id=c contenteditable>x</div>\
             <div id=r role=checkbox tabindex=0>x</div>",
        );

        for id in ["t", "s", "c", "r"] {
            assert!(is_control(&element(&dom, id)), "{id}");
        }
    }

    #[test]
    fn focusable() {
        let dom = parse(
            "<a id=a href=x>x</a><span id=s tabindex=-1>x</span><span id=z tabindex=0>x</span>",
        );

        for id in ["a", "s", "z"] {
            assert!(is_focusable(&element(&dom, id)), "{id}");
        }
    }

    #[test]
    fn content_stops() {
        let dom = parse(
            "<p id=p>Text</p><input id=i><table id=t border=1><caption>C</caption>\
             <tr><th>a</th><th>b</th></tr><tr><td>1</td><td>2</td></tr></table>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        for id in ["p", "i", "t"] {
            assert!(query.has_content(&element(&dom, id)), "{id}");
        }
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
    use voxdom::a11y::{is_control, is_focusable, is_leaf_level_control, Query};
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    #[test]
    fn containers_are_not_leaves() {
        let dom = parse(
            "<div id=d><p>x</p></div><h2 id=h>Title <input></h2><a id=a href=x><h3>In link</h3></a>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        for id in ["d", "h", "a"] {
            assert!(!query.is_leaf_node(&element(&dom, id), false), "{id}");
        }
    }

    #[test]
    fn not_controls() {
        let dom = parse(
            "<input id=h type=hidden><div id=d>x</div><div id=r role=checkbox>x</div>",
        );

        for id in ["h", "d", "r"] {
            assert!(!is_control(&element(&dom, id)), "{id}");
        }
    }

    #[test]
    fn composite_with_focusable_children() {
        let dom = parse(
            "<div id=l role=listbox tabindex=0><div role=option tabindex=-1>a</div></div>",
        );

        assert!(!is_leaf_level_control(&element(&dom, "l")));
    }

    #[test]
    fn anchor_without_href() {
        let dom = parse("<a id=a name=top>x</a><span id=s tabindex=-2>x</span>");

        assert!(!is_focusable(&element(&dom, "a")));
        assert!(!is_focusable(&element(&dom, "s")));
    }

    #[test]
    fn no_content() {
        let dom = parse(
            "<p id=blank>   </p><div id=hidden style='display:none'>x</div>\
             <div id=aria aria-hidden=true>x</div>\
             <label for=n><span id=l>Name</span></label><input id=n>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        for id in ["blank", "hidden", "aria", "l"] {
            assert!(!query.has_content(&element(&dom, id)), "{id}");
        }
    }
}
