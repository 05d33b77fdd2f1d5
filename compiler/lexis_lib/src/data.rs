//! Library contents.
//!
//! Each library lists the libraries it references and the globals it
//! declares. An interface merged with a `declare var` of the same name is
//! `TypeValue`; a lone interface or type alias is `Type`; a lone
//! `declare var`/`declare function` is `Value`.

use crate::AmbientKind::{Type as T, TypeValue as TV, Value as V};
use crate::{LibDefinition, LibName};

const fn def(
    libs: &'static [LibName],
    variables: &'static [(&'static str, crate::AmbientKind)],
) -> LibDefinition {
    LibDefinition { libs, variables }
}

const NONE: &[LibName] = &[];

pub(crate) static LIB: LibDefinition = def(
    &[
        LibName::Es5,
        LibName::Dom,
        LibName::WebworkerImportscripts,
        LibName::Scripthost,
    ],
    &[],
);

pub(crate) static ES5: LibDefinition = def(
    &[LibName::Decorators, LibName::DecoratorsLegacy],
    &[
        ("NaN", V),
        ("Infinity", V),
        ("eval", V),
        ("parseInt", V),
        ("parseFloat", V),
        ("isNaN", V),
        ("isFinite", V),
        ("decodeURI", V),
        ("decodeURIComponent", V),
        ("encodeURI", V),
        ("encodeURIComponent", V),
        ("escape", V),
        ("unescape", V),
        ("Symbol", T),
        ("PropertyKey", T),
        ("PropertyDescriptor", T),
        ("PropertyDescriptorMap", T),
        ("Object", TV),
        ("ObjectConstructor", T),
        ("Function", TV),
        ("FunctionConstructor", T),
        ("ThisParameterType", T),
        ("OmitThisParameter", T),
        ("CallableFunction", T),
        ("NewableFunction", T),
        ("IArguments", T),
        ("String", TV),
        ("StringConstructor", T),
        ("Boolean", TV),
        ("BooleanConstructor", T),
        ("Number", TV),
        ("NumberConstructor", T),
        ("TemplateStringsArray", T),
        ("ImportMeta", T),
        ("ImportCallOptions", T),
        ("ImportAssertions", T),
        ("ImportAttributes", T),
        ("Math", TV),
        ("Date", TV),
        ("DateConstructor", T),
        ("RegExpMatchArray", T),
        ("RegExpExecArray", T),
        ("RegExp", TV),
        ("RegExpConstructor", T),
        ("Error", TV),
        ("ErrorConstructor", T),
        ("EvalError", TV),
        ("EvalErrorConstructor", T),
        ("RangeError", TV),
        ("RangeErrorConstructor", T),
        ("ReferenceError", TV),
        ("ReferenceErrorConstructor", T),
        ("SyntaxError", TV),
        ("SyntaxErrorConstructor", T),
        ("TypeError", TV),
        ("TypeErrorConstructor", T),
        ("URIError", TV),
        ("URIErrorConstructor", T),
        ("JSON", TV),
        ("ReadonlyArray", T),
        ("ConcatArray", T),
        ("Array", TV),
        ("ArrayConstructor", T),
        ("TypedPropertyDescriptor", T),
        ("PromiseConstructorLike", T),
        ("PromiseLike", T),
        ("Promise", T),
        ("Awaited", T),
        ("ArrayLike", T),
        ("Partial", T),
        ("Required", T),
        ("Readonly", T),
        ("Pick", T),
        ("Record", T),
        ("Exclude", T),
        ("Extract", T),
        ("Omit", T),
        ("NonNullable", T),
        ("Parameters", T),
        ("ConstructorParameters", T),
        ("ReturnType", T),
        ("InstanceType", T),
        ("Uppercase", T),
        ("Lowercase", T),
        ("Capitalize", T),
        ("Uncapitalize", T),
        ("NoInfer", T),
        ("ThisType", T),
        ("WeakKeyTypes", T),
        ("WeakKey", T),
        ("ArrayBuffer", TV),
        ("ArrayBufferTypes", T),
        ("ArrayBufferLike", T),
        ("ArrayBufferConstructor", T),
        ("ArrayBufferView", T),
        ("DataView", TV),
        ("DataViewConstructor", T),
        ("Int8Array", TV),
        ("Int8ArrayConstructor", T),
        ("Uint8Array", TV),
        ("Uint8ArrayConstructor", T),
        ("Uint8ClampedArray", TV),
        ("Uint8ClampedArrayConstructor", T),
        ("Int16Array", TV),
        ("Int16ArrayConstructor", T),
        ("Uint16Array", TV),
        ("Uint16ArrayConstructor", T),
        ("Int32Array", TV),
        ("Int32ArrayConstructor", T),
        ("Uint32Array", TV),
        ("Uint32ArrayConstructor", T),
        ("Float32Array", TV),
        ("Float32ArrayConstructor", T),
        ("Float64Array", TV),
        ("Float64ArrayConstructor", T),
        ("Intl", TV),
    ],
);

pub(crate) static ES2015: LibDefinition = def(
    &[
        LibName::Es5,
        LibName::Es2015Core,
        LibName::Es2015Collection,
        LibName::Es2015Iterable,
        LibName::Es2015Generator,
        LibName::Es2015Promise,
        LibName::Es2015Proxy,
        LibName::Es2015Reflect,
        LibName::Es2015Symbol,
        LibName::Es2015SymbolWellknown,
    ],
    &[],
);

pub(crate) static ES2015_CORE: LibDefinition = def(
    NONE,
    &[
        ("Array", T),
        ("ArrayConstructor", T),
        ("DateConstructor", T),
        ("Function", T),
        ("Math", T),
        ("NumberConstructor", T),
        ("ObjectConstructor", T),
        ("ReadonlyArray", T),
        ("RegExp", T),
        ("RegExpConstructor", T),
        ("String", T),
        ("StringConstructor", T),
        ("Int8Array", T),
        ("Uint8Array", T),
        ("Float64Array", T),
    ],
);

pub(crate) static ES2015_COLLECTION: LibDefinition = def(
    NONE,
    &[
        ("Map", TV),
        ("MapConstructor", T),
        ("ReadonlyMap", T),
        ("WeakMap", TV),
        ("WeakMapConstructor", T),
        ("Set", TV),
        ("SetConstructor", T),
        ("ReadonlySet", T),
        ("WeakSet", TV),
        ("WeakSetConstructor", T),
    ],
);

pub(crate) static ES2015_GENERATOR: LibDefinition = def(
    &[LibName::Es2015Iterable],
    &[("Generator", T), ("GeneratorFunction", T), ("GeneratorFunctionConstructor", T)],
);

pub(crate) static ES2015_ITERABLE: LibDefinition = def(
    &[LibName::Es2015Symbol],
    &[
        ("SymbolConstructor", T),
        ("IteratorYieldResult", T),
        ("IteratorReturnResult", T),
        ("IteratorResult", T),
        ("Iterator", T),
        ("Iterable", T),
        ("IterableIterator", T),
        ("IteratorObject", T),
        ("BuiltinIteratorReturn", T),
        ("ArrayIterator", T),
        ("Array", T),
        ("ArrayConstructor", T),
        ("ReadonlyArray", T),
        ("IArguments", T),
        ("MapIterator", T),
        ("Map", T),
        ("ReadonlyMap", T),
        ("MapConstructor", T),
        ("WeakMap", T),
        ("WeakMapConstructor", T),
        ("SetIterator", T),
        ("Set", T),
        ("ReadonlySet", T),
        ("SetConstructor", T),
        ("WeakSet", T),
        ("WeakSetConstructor", T),
        ("Promise", T),
        ("PromiseConstructor", T),
        ("StringIterator", T),
        ("String", T),
        ("Int8Array", T),
        ("Int8ArrayConstructor", T),
        ("Uint8Array", T),
        ("Uint8ArrayConstructor", T),
        ("Uint8ClampedArray", T),
        ("Uint8ClampedArrayConstructor", T),
        ("Int16Array", T),
        ("Int16ArrayConstructor", T),
        ("Uint16Array", T),
        ("Uint16ArrayConstructor", T),
        ("Int32Array", T),
        ("Int32ArrayConstructor", T),
        ("Uint32Array", T),
        ("Uint32ArrayConstructor", T),
        ("Float32Array", T),
        ("Float32ArrayConstructor", T),
        ("Float64Array", T),
        ("Float64ArrayConstructor", T),
    ],
);

pub(crate) static ES2015_PROMISE: LibDefinition =
    def(NONE, &[("PromiseConstructor", T), ("Promise", V)]);

pub(crate) static ES2015_PROXY: LibDefinition =
    def(NONE, &[("ProxyHandler", T), ("ProxyConstructor", T), ("Proxy", V)]);

pub(crate) static ES2015_REFLECT: LibDefinition = def(NONE, &[("Reflect", V)]);

pub(crate) static ES2015_SYMBOL: LibDefinition =
    def(NONE, &[("SymbolConstructor", T), ("Symbol", V)]);

pub(crate) static ES2015_SYMBOL_WELLKNOWN: LibDefinition = def(
    &[LibName::Es2015Symbol],
    &[
        ("SymbolConstructor", T),
        ("Symbol", T),
        ("Array", T),
        ("ReadonlyArray", T),
        ("Date", T),
        ("Map", T),
        ("WeakMap", T),
        ("Set", T),
        ("WeakSet", T),
        ("JSON", T),
        ("Function", T),
        ("GeneratorFunction", T),
        ("Math", T),
        ("Promise", T),
        ("PromiseConstructor", T),
        ("RegExp", T),
        ("RegExpConstructor", T),
        ("String", T),
        ("ArrayBuffer", T),
        ("DataView", T),
        ("ArrayBufferConstructor", T),
    ],
);

pub(crate) static ES2016: LibDefinition =
    def(&[LibName::Es2015, LibName::Es2016ArrayInclude, LibName::Es2016Intl], &[]);

pub(crate) static ES2016_ARRAY_INCLUDE: LibDefinition =
    def(NONE, &[("Array", T), ("ReadonlyArray", T), ("Int8Array", T), ("Uint8Array", T)]);

pub(crate) static ES2016_INTL: LibDefinition = def(NONE, &[("Intl", V)]);

pub(crate) static ES2017: LibDefinition = def(
    &[
        LibName::Es2016,
        LibName::Es2017Object,
        LibName::Es2017Sharedmemory,
        LibName::Es2017String,
        LibName::Es2017Intl,
        LibName::Es2017Typedarrays,
        LibName::Es2017Date,
    ],
    &[],
);

pub(crate) static ES2017_DATE: LibDefinition = def(NONE, &[("DateConstructor", T)]);

pub(crate) static ES2017_INTL: LibDefinition = def(NONE, &[("Intl", V)]);

pub(crate) static ES2017_OBJECT: LibDefinition = def(NONE, &[("ObjectConstructor", T)]);

pub(crate) static ES2017_SHAREDMEMORY: LibDefinition = def(
    &[LibName::Es2015Symbol, LibName::Es2015SymbolWellknown],
    &[
        ("SharedArrayBuffer", TV),
        ("SharedArrayBufferConstructor", T),
        ("ArrayBufferTypes", T),
        ("Atomics", TV),
    ],
);

pub(crate) static ES2017_STRING: LibDefinition = def(NONE, &[("String", T)]);

pub(crate) static ES2017_TYPEDARRAYS: LibDefinition = def(
    NONE,
    &[
        ("Int8ArrayConstructor", T),
        ("Uint8ArrayConstructor", T),
        ("Float64ArrayConstructor", T),
    ],
);

pub(crate) static ES2018: LibDefinition = def(
    &[
        LibName::Es2017,
        LibName::Es2018Asynciterable,
        LibName::Es2018Asyncgenerator,
        LibName::Es2018Promise,
        LibName::Es2018Regexp,
        LibName::Es2018Intl,
    ],
    &[],
);

pub(crate) static ES2018_ASYNCGENERATOR: LibDefinition = def(
    &[LibName::Es2018Asynciterable],
    &[
        ("AsyncGenerator", T),
        ("AsyncGeneratorFunction", T),
        ("AsyncGeneratorFunctionConstructor", T),
    ],
);

pub(crate) static ES2018_ASYNCITERABLE: LibDefinition = def(
    &[LibName::Es2015Symbol, LibName::Es2015Iterable],
    &[
        ("SymbolConstructor", T),
        ("AsyncIterator", T),
        ("AsyncIterable", T),
        ("AsyncIterableIterator", T),
        ("AsyncIteratorObject", T),
    ],
);

pub(crate) static ES2018_INTL: LibDefinition = def(NONE, &[("Intl", V)]);

pub(crate) static ES2018_PROMISE: LibDefinition = def(NONE, &[("Promise", T)]);

pub(crate) static ES2018_REGEXP: LibDefinition = def(
    NONE,
    &[("RegExpMatchArray", T), ("RegExpExecArray", T), ("RegExp", T)],
);

pub(crate) static ES2019: LibDefinition = def(
    &[
        LibName::Es2018,
        LibName::Es2019Array,
        LibName::Es2019Object,
        LibName::Es2019String,
        LibName::Es2019Symbol,
        LibName::Es2019Intl,
    ],
    &[],
);

pub(crate) static ES2019_ARRAY: LibDefinition =
    def(NONE, &[("FlatArray", T), ("ReadonlyArray", T), ("Array", T)]);

pub(crate) static ES2019_INTL: LibDefinition = def(NONE, &[("Intl", V)]);

pub(crate) static ES2019_OBJECT: LibDefinition =
    def(&[LibName::Es2015Iterable], &[("ObjectConstructor", T)]);

pub(crate) static ES2019_STRING: LibDefinition = def(NONE, &[("String", T)]);

pub(crate) static ES2019_SYMBOL: LibDefinition = def(NONE, &[("Symbol", T)]);

pub(crate) static ES2019_FULL: LibDefinition = def(
    &[
        LibName::Es2019,
        LibName::Dom,
        LibName::WebworkerImportscripts,
        LibName::Scripthost,
        LibName::DomIterable,
        LibName::DomAsynciterable,
    ],
    &[],
);

pub(crate) static ES2020: LibDefinition = def(
    &[
        LibName::Es2019,
        LibName::Es2020Bigint,
        LibName::Es2020Date,
        LibName::Es2020Number,
        LibName::Es2020Promise,
        LibName::Es2020Sharedmemory,
        LibName::Es2020String,
        LibName::Es2020SymbolWellknown,
        LibName::Es2020Intl,
    ],
    &[],
);

pub(crate) static ES2020_BIGINT: LibDefinition = def(
    &[LibName::Es2020Intl],
    &[
        ("BigIntToLocaleStringOptions", T),
        ("BigInt", TV),
        ("BigIntConstructor", T),
        ("BigInt64Array", TV),
        ("BigInt64ArrayConstructor", T),
        ("BigUint64Array", TV),
        ("BigUint64ArrayConstructor", T),
        ("DataView", T),
        ("Intl", V),
    ],
);

pub(crate) static ES2020_DATE: LibDefinition = def(&[LibName::Es2020Intl], &[("Date", T)]);

pub(crate) static ES2020_INTL: LibDefinition =
    def(&[LibName::Es2018Intl], &[("Intl", V)]);

pub(crate) static ES2020_NUMBER: LibDefinition = def(&[LibName::Es2020Intl], &[("Number", T)]);

pub(crate) static ES2020_PROMISE: LibDefinition = def(
    NONE,
    &[
        ("PromiseFulfilledResult", T),
        ("PromiseRejectedResult", T),
        ("PromiseSettledResult", T),
        ("PromiseConstructor", T),
    ],
);

pub(crate) static ES2020_SHAREDMEMORY: LibDefinition =
    def(&[LibName::Es2020Bigint], &[("Atomics", T)]);

pub(crate) static ES2020_STRING: LibDefinition =
    def(&[LibName::Es2015Iterable, LibName::Es2020Intl], &[("String", T)]);

pub(crate) static ES2020_SYMBOL_WELLKNOWN: LibDefinition = def(
    &[LibName::Es2015Iterable, LibName::Es2015Symbol],
    &[("SymbolConstructor", T), ("RegExp", T), ("RegExpStringIterator", T)],
);

pub(crate) static ES2021: LibDefinition = def(
    &[
        LibName::Es2020,
        LibName::Es2021Promise,
        LibName::Es2021String,
        LibName::Es2021Weakref,
        LibName::Es2021Intl,
    ],
    &[],
);

pub(crate) static ES2021_INTL: LibDefinition = def(NONE, &[("Intl", V)]);

pub(crate) static ES2021_PROMISE: LibDefinition = def(
    NONE,
    &[
        ("AggregateError", TV),
        ("AggregateErrorConstructor", T),
        ("PromiseConstructor", T),
    ],
);

pub(crate) static ES2021_STRING: LibDefinition = def(NONE, &[("String", T)]);

pub(crate) static ES2021_WEAKREF: LibDefinition = def(
    NONE,
    &[
        ("WeakRef", TV),
        ("WeakRefConstructor", T),
        ("FinalizationRegistry", TV),
        ("FinalizationRegistryConstructor", T),
    ],
);

pub(crate) static ES2022: LibDefinition = def(
    &[
        LibName::Es2021,
        LibName::Es2022Array,
        LibName::Es2022Error,
        LibName::Es2022Intl,
        LibName::Es2022Object,
        LibName::Es2022Regexp,
        LibName::Es2022String,
    ],
    &[],
);

pub(crate) static ES2022_ARRAY: LibDefinition =
    def(NONE, &[("Array", T), ("ReadonlyArray", T), ("Int8Array", T)]);

pub(crate) static ES2022_ERROR: LibDefinition = def(
    &[LibName::Es2021Promise],
    &[
        ("ErrorOptions", T),
        ("Error", T),
        ("ErrorConstructor", T),
        ("AggregateErrorConstructor", T),
    ],
);

pub(crate) static ES2022_INTL: LibDefinition = def(NONE, &[("Intl", V)]);

pub(crate) static ES2022_OBJECT: LibDefinition = def(NONE, &[("ObjectConstructor", T)]);

pub(crate) static ES2022_REGEXP: LibDefinition = def(
    NONE,
    &[("RegExpMatchArray", T), ("RegExpExecArray", T), ("RegExpIndicesArray", T), ("RegExp", T)],
);

pub(crate) static ES2022_STRING: LibDefinition = def(NONE, &[("String", T)]);

pub(crate) static ES2023: LibDefinition = def(
    &[LibName::Es2022, LibName::Es2023Array, LibName::Es2023Collection],
    &[],
);

pub(crate) static ES2023_ARRAY: LibDefinition =
    def(NONE, &[("Array", T), ("ReadonlyArray", T), ("Int8Array", T)]);

pub(crate) static ES2023_COLLECTION: LibDefinition = def(NONE, &[("WeakKeyTypes", T)]);

pub(crate) static ESNEXT: LibDefinition =
    def(&[LibName::Es2023, LibName::EsnextDecorators], &[]);

pub(crate) static ESNEXT_DECORATORS: LibDefinition = def(
    &[LibName::Es2015Symbol, LibName::Decorators],
    &[("SymbolConstructor", T), ("Function", T)],
);

pub(crate) static DECORATORS: LibDefinition = def(
    NONE,
    &[
        ("ClassMemberDecoratorContext", T),
        ("DecoratorContext", T),
        ("DecoratorMetadataObject", T),
        ("DecoratorMetadata", T),
        ("ClassDecoratorContext", T),
        ("ClassMethodDecoratorContext", T),
        ("ClassGetterDecoratorContext", T),
        ("ClassSetterDecoratorContext", T),
        ("ClassAccessorDecoratorContext", T),
        ("ClassAccessorDecoratorTarget", T),
        ("ClassAccessorDecoratorResult", T),
        ("ClassFieldDecoratorContext", T),
    ],
);

pub(crate) static DECORATORS_LEGACY: LibDefinition = def(
    NONE,
    &[
        ("ClassDecorator", T),
        ("PropertyDecorator", T),
        ("MethodDecorator", T),
        ("ParameterDecorator", T),
    ],
);

pub(crate) static DOM: LibDefinition = def(
    &[LibName::Es2015, LibName::Es2018Asynciterable],
    &[
        ("window", V),
        ("self", V),
        ("document", V),
        ("navigator", V),
        ("location", V),
        ("history", V),
        ("localStorage", V),
        ("sessionStorage", V),
        ("console", V),
        ("fetch", V),
        ("setTimeout", V),
        ("clearTimeout", V),
        ("setInterval", V),
        ("clearInterval", V),
        ("requestAnimationFrame", V),
        ("queueMicrotask", V),
        ("alert", V),
        ("name", V),
        ("Console", T),
        ("Window", TV),
        ("Document", TV),
        ("Node", TV),
        ("Element", TV),
        ("HTMLElement", TV),
        ("HTMLDivElement", TV),
        ("HTMLInputElement", TV),
        ("HTMLCanvasElement", TV),
        ("SVGElement", TV),
        ("Event", TV),
        ("EventTarget", TV),
        ("EventListener", T),
        ("EventListenerOrEventListenerObject", T),
        ("CustomEvent", TV),
        ("MouseEvent", TV),
        ("KeyboardEvent", TV),
        ("Response", TV),
        ("Request", TV),
        ("RequestInit", T),
        ("Headers", TV),
        ("URL", TV),
        ("URLSearchParams", TV),
        ("Blob", TV),
        ("File", TV),
        ("FormData", TV),
        ("AbortController", TV),
        ("AbortSignal", TV),
        ("TextEncoder", TV),
        ("TextDecoder", TV),
        ("WebSocket", TV),
        ("Worker", TV),
        ("XMLHttpRequest", TV),
        ("MutationObserver", TV),
        ("IntersectionObserver", TV),
        ("Storage", TV),
        ("Location", TV),
        ("Navigator", TV),
        ("Performance", TV),
        ("NodeList", TV),
        ("NodeListOf", T),
        ("HTMLCollection", TV),
        ("HTMLElementTagNameMap", T),
    ],
);

pub(crate) static DOM_ITERABLE: LibDefinition = def(
    &[LibName::Dom],
    &[
        ("NodeList", T),
        ("NodeListOf", T),
        ("HTMLCollectionBase", T),
        ("Headers", T),
        ("FormData", T),
        ("URLSearchParams", T),
    ],
);

pub(crate) static DOM_ASYNCITERABLE: LibDefinition =
    def(&[LibName::Dom], &[("ReadableStream", T), ("FileSystemDirectoryHandle", T)]);

pub(crate) static WEBWORKER_IMPORTSCRIPTS: LibDefinition = def(NONE, &[("importScripts", V)]);

pub(crate) static SCRIPTHOST: LibDefinition = def(
    NONE,
    &[
        ("ActiveXObject", TV),
        ("ITextWriter", T),
        ("TextStreamBase", T),
        ("TextStreamWriter", T),
        ("TextStreamReader", T),
        ("SafeArray", TV),
        ("Enumerator", TV),
        ("EnumeratorConstructor", T),
        ("VBArray", TV),
        ("VBArrayConstructor", T),
        ("VarDate", TV),
    ],
);
