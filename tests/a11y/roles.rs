//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use voxdom::a11y::{MessageCatalog, Query};
    use voxdom::core::{Verbosity, VoxOptions};

    use crate::common::{element, parse};

    #[test]
    fn verbose_roles() {
        let dom = parse(
            "<button id=b>x</button><input id=e type=email><nav id=n>x</nav>\
             <div id=s role=slider>x</div><a id=a href='#top'>x</a><a id=l href=/x>x</a>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_role(&element(&dom, "b")), "Button");
        assert_eq!(query.get_role(&element(&dom, "s")), "Slider");
        assert_eq!(query.get_role_msg(&element(&dom, "e")), Some("input_type_email"));
        assert_eq!(query.get_role_msg(&element(&dom, "n")), Some("tag_nav"));
        assert_eq!(query.get_role_msg(&element(&dom, "a")), Some("internal_link"));
        assert_eq!(query.get_role(&element(&dom, "l")), "Link");
    }

    #[test]
    fn brief_roles() {
        let dom = parse("<h3 id=h>x</h3><a id=l href=/x>x</a>");
        let options = VoxOptions {
            verbosity: Verbosity::Brief,
            ..Default::default()
        };
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_role_msg(&element(&dom, "h")), Some("tag_h3_brief"));
        assert_eq!(query.get_role_msg(&element(&dom, "l")), Some("tag_link"));
    }

    #[test]
    fn aria_states_in_order() {
        let dom = parse(
            "<div id=t role=treeitem aria-expanded=true aria-selected=true \
             aria-posinset=2 aria-setsize=5>x</div>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_state(&element(&dom, "t")), "expanded selected 2 of 5");
    }

    #[test]
    fn value_text_over_value_now() {
        let dom = parse(
            "<div id=s role=slider aria-valuenow=3 aria-valuetext='three stars'>x</div>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        let msgs = query.get_state_msgs(&element(&dom, "s"));

        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].key, "aria_value_text");
        assert_eq!(msgs[0].args, vec!["three stars".to_string()]);
    }

    #[test]
    fn multiple_selection() {
        let dom = parse(
            "<select id=m multiple><option selected>a</option><option selected>b</option></select>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_state(&element(&dom, "m")), "2 selected");
    }

    #[test]
    fn disabled_by_fieldset() {
        let dom = parse("<fieldset disabled><button id=b>x</button></fieldset>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_state(&element(&dom, "b")), "disabled");
    }

    struct GermanMessages;

    impl MessageCatalog for GermanMessages {
        fn lookup(&self, key: &str) -> Option<&str> {
            match key {
                "tag_button" => Some("Schaltfläche"),
                "list_position" => Some("$1 von $2"),
                _ => None,
            }
        }
    }

    #[test]
    fn custom_message_catalog() {
        let dom = parse("<button id=b>x</button><h2 id=h>x</h2>");
        let options = VoxOptions::default();
        let catalog = GermanMessages;
        let query = Query::new(&dom.document, &options).with_messages(&catalog);

        assert_eq!(query.get_role(&element(&dom, "b")), "Schaltfläche");
        assert_eq!(query.msg("list_position", &["2".to_string(), "5".to_string()]), "2 von 5");
        // 目录中没有的键展开为空串
        assert_eq!(query.get_role_msg(&element(&dom, "h")), Some("tag_h2"));
        assert_eq!(query.get_role(&element(&dom, "h")), "");
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
    use voxdom::a11y::Query;
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    #[test]
    fn no_role() {
        let dom = parse(
            "<div id=d>x</div><span id=p role=presentation>x</span><a id=n name=top>x</a>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        for id in ["d", "p", "n"] {
            assert_eq!(query.get_role(&element(&dom, id)), "", "{id}");
        }
    }

    #[test]
    fn unknown_role_token_falls_through() {
        let dom = parse("<div id=d role='bogus button'>x</div>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_role(&element(&dom, "d")), "Button");
    }

    #[test]
    fn role_hides_native_states() {
        let dom = parse("<input id=c type=checkbox checked role=switch>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_state(&element(&dom, "c")), "");
    }

    #[test]
    fn plain_text_has_no_state() {
        let dom = parse("<p id=p>x</p>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert!(query.get_state_msgs(&element(&dom, "p")).is_empty());
    }
}
