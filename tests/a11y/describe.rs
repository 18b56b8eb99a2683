//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use voxdom::core::{describe_document, describe_element, walk_document, VoxOptions};

    use crate::common::parse;

    fn lines(html: &str, options: &VoxOptions) -> Vec<String> {
        describe_document(&parse(html), options)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn landmark_context() {
        assert_eq!(
            lines(
                "<nav><a href=/a>Home</a></nav><main><h2>News</h2><p>Today</p></main>",
                &VoxOptions::default()
            ),
            vec!["Navigation Home Link", "Main News Heading 2", "Today"]
        );
    }

    #[test]
    fn form_controls() {
        assert_eq!(
            lines(
                "<label for=n>Name</label><input id=n value=Ann>\
                 <input type=checkbox id=c checked><label for=c>Subscribe</label>",
                &VoxOptions::default()
            ),
            vec!["Name Ann Edit text", "Subscribe Check box checked"]
        );
    }

    #[test]
    fn reverse_walk() {
        let dom = parse("<p>one</p><p>two</p><p>three</p>");
        let lines: Vec<String> = walk_document(&dom, &VoxOptions::default(), true)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(lines, vec!["three", "two", "one"]);
    }

    #[test]
    fn single_element() {
        let dom = parse("<div role=slider id=s aria-label=Volume aria-valuenow=7>x</div>");
        let description = describe_element(&dom, "s", &VoxOptions::default()).unwrap();

        assert_eq!(description.text, "Volume");
        assert_eq!(description.annotation, "Slider 7");
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
    use voxdom::core::{describe_document, describe_element, VoxError, VoxOptions};

    use crate::common::parse;

    #[test]
    fn missing_element() {
        let dom = parse("<p>x</p>");
        let result = describe_element(&dom, "nope", &VoxOptions::default());

        assert!(matches!(result, Err(VoxError::NotFound(_))));
    }

    #[test]
    fn hidden_document() {
        let dom = parse("<div style='display:none'><p>Secret</p></div><div aria-hidden=true>Gone</div>");

        assert!(describe_document(&dom, &VoxOptions::default()).is_empty());
    }
}
